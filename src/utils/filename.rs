use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Inserts `suffix` between the file stem and the extension,
/// or appends it when the file name has no extension.
pub fn insert_suffix_before_extension(path: &Path, suffix: &OsStr) -> PathBuf {
    let (Some(stem), Some(extension)) = (path.file_stem(), path.extension()) else {
        let mut appended = path.as_os_str().to_owned();
        appended.push(suffix);
        return PathBuf::from(appended);
    };

    let mut file_name = OsString::from(stem);
    file_name.push(suffix);
    file_name.push(".");
    file_name.push(extension);
    path.with_file_name(file_name)
}

/// Where to write `count` images when the user asked for `output`.
/// A single image goes to `output` itself; several images are numbered from 1,
/// like imagemagick does for multi-image output.
pub fn output_paths(output: &Path, count: usize) -> Vec<PathBuf> {
    if count == 1 {
        return vec![output.to_path_buf()];
    }
    (1..=count)
        .map(|i| insert_suffix_before_extension(output, &OsString::from(format!("-{i}"))))
        .collect()
}
