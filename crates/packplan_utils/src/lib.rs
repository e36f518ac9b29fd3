pub mod dataurl;
pub mod indexmap;
pub mod path_ext;
pub mod sanitize_file_name;
pub mod xxhash;
