/// Embed a function id into the file name of a schema location.
///
/// `a/b/c.xsd` + `007` becomes `a/b/c-007.xsd`. Only the last `/` separates
/// the directory and only the last `.` of the file name starts the extension.
/// An empty location stays empty. An empty directory part (a location that
/// starts with its only `/`) is treated as no directory at all.
pub fn schema_location_for_function(base: &str, function_id: &str) -> String {
    if base.is_empty() {
        return String::new();
    }

    let (directory, filename) = match base.rsplit_once('/') {
        Some((directory, filename)) => (Some(directory), filename),
        None => (None, base),
    };

    let renamed = match filename.rsplit_once('.') {
        Some((stem, extension)) => format!("{stem}-{function_id}.{extension}"),
        None => format!("{filename}-{function_id}"),
    };

    match directory {
        Some(directory) if !directory.is_empty() => format!("{directory}/{renamed}"),
        _ => renamed,
    }
}
