use std::path::PathBuf;

/// Split `path:line` into the path and a 0-based line.
///
/// Lines are 1-based on the command line. A suffix that is not a number stays
/// part of the path.
pub fn parse_filepath_with_line(filepath_arg: &str) -> (PathBuf, Option<u32>) {
    if let Some((path_part, line_part)) = filepath_arg.rsplit_once(':') {
        if let Ok(line_num) = line_part.parse::<u32>() {
            return (PathBuf::from(path_part), Some(line_num.saturating_sub(1)));
        }
    }
    (PathBuf::from(filepath_arg), None)
}
