mod args;
mod types;

use ansi_term::Colour;
use clap::Parser;

use args::{OutputArgs, ReportArgs, SelectionArgs};
use packplan::{
  BuildError, BuildMode, Classifier, EmitPlan, Pipeline, PolicyOptions, ResolveHints,
  SourcemapKind, plan_asset_emit, plan_chunk_emit,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  selection: SelectionArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  report: ReportArgs,
}

struct ReportRow {
  input: String,
  pipeline: String,
  target: String,
}

fn mode_from_env() -> Result<BuildMode, String> {
  match std::env::var("BUILD_MODE") {
    Ok(value) => value.parse(),
    Err(_) => Ok(BuildMode::Development),
  }
}

fn describe_plan(plan: &EmitPlan) -> String {
  match plan {
    EmitPlan::File { filename } => filename.clone(),
    EmitPlan::InlineDataUri { data_uri } => format!("inline data URI ({} chars)", data_uri.len()),
    EmitPlan::InjectStyle => "runtime <style> injection".to_string(),
  }
}

/// A directive applied to real bytes where the file is readable; otherwise
/// the row shows the unrendered template so the policy is still visible.
fn plan_rows(
  classifier: &Classifier,
  path: &str,
  errors: &mut Vec<anyhow::Error>,
) -> Vec<ReportRow> {
  let directive = classifier.classify(path);
  let on_disk = path.split('?').next().unwrap_or(path);
  let bytes = match std::fs::read(on_disk) {
    Ok(bytes) => Some(bytes),
    Err(error) if error.kind() == std::io::ErrorKind::NotFound => None,
    Err(error) => {
      errors.push(anyhow::Error::new(error).context(format!("failed to read `{on_disk}`")));
      None
    }
  };
  let chunk_name = std::path::Path::new(on_disk)
    .file_stem()
    .and_then(|stem| stem.to_str())
    .unwrap_or("input")
    .to_string();

  let is_composite = directive.pipeline == Pipeline::Component;
  classifier
    .expand(&directive)
    .into_iter()
    .map(|directive| {
      let half = if is_composite {
        if directive.pipeline.is_style() { " (style)" } else { " (script)" }
      } else {
        ""
      };
      let target = match &bytes {
        Some(bytes) => {
          let plan = if directive.pipeline == Pipeline::Script || directive.pipeline.is_style() {
            plan_chunk_emit(&directive, &chunk_name, &[bytes.as_slice()])
          } else {
            plan_asset_emit(&directive, path, bytes)
          };
          describe_plan(&plan)
        }
        None => format!("{}{}", directive.output_subdir, directive.filename_template.template()),
      };
      ReportRow {
        input: format!("{path}{half}"),
        pipeline: directive.pipeline.to_string(),
        target,
      }
    })
    .collect()
}

fn print_report(classifier: &Classifier, rows: &[ReportRow]) {
  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  println!(
    "{} {}  {} {}  {} {}",
    dim.paint("mode:"),
    classifier.mode(),
    dim.paint("dir:"),
    classifier.options().dir,
    dim.paint("sourcemap:"),
    SourcemapKind::for_mode(classifier.mode())
  );

  let mut left = 0;
  let mut middle = 0;
  for row in rows {
    if row.input.len() > left {
      left = row.input.len();
    }
    if row.pipeline.len() > middle {
      middle = row.pipeline.len();
    }
  }

  for row in rows {
    println!(
      "{}{:input_pad$} {}{:pipeline_pad$} {} {}",
      color.paint(&row.input),
      "",
      dim.paint(&row.pipeline),
      "",
      dim.paint("│"),
      row.target,
      input_pad = left - row.input.len(),
      pipeline_pad = middle - row.pipeline.len(),
    );
  }
}

fn main() {
  let args = Commands::parse();

  let mode = match args.selection.mode.map(Into::into) {
    Some(mode) => mode,
    None => match mode_from_env() {
      Ok(mode) => mode,
      Err(message) => {
        println!("{} {message}", Colour::Red.paint("Error:"));
        return;
      }
    },
  };

  let classifier = Classifier::new(PolicyOptions {
    mode: Some(mode),
    dir: args.output.dir,
    script_filenames: args.output.script_filenames,
    style_filenames: args.output.style_filenames,
    asset_filenames: args.output.asset_filenames,
    inline_limit: args.output.inline_limit,
  });

  if args.report.rules {
    match serde_json::to_string_pretty(classifier.rules()) {
      Ok(json) => println!("{json}"),
      Err(error) => println!("{} {error}", Colour::Red.paint("Error:")),
    }
    return;
  }

  if let Some(specifier) = &args.report.resolve {
    let hints = ResolveHints::default();
    for candidate in hints.candidates(specifier) {
      println!("{candidate}");
    }
    return;
  }

  let mut errors = vec![];
  let rows = args
    .selection
    .paths
    .iter()
    .flat_map(|path| plan_rows(&classifier, path, &mut errors))
    .collect::<Vec<_>>();

  print_report(&classifier, &rows);

  if !errors.is_empty() {
    let errors = BuildError::from(errors);
    for error in &*errors {
      println!("{} {}", Colour::Red.paint("Error:"), error);
    }
  }
}
