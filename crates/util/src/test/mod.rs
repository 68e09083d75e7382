use std::ffi::OsString;
use std::path::PathBuf;
use predicates::function::FnPredicate;
use predicates::prelude::predicate;
use tempfile::TempDir;

/// A predicate that always passes, printing the content it is given.
///
/// Useful for showing the output of a command in the test log before the real assertions run.
pub fn print(message: &str) -> FnPredicate<fn(&str) -> bool, str> {
    println!("{}:", message);
    predicate::function(|content| {
        println!("{}", content);
        true
    })
}

pub fn build_temp_file(temp_dir: &TempDir, base: &str, extension: &str) -> (PathBuf, OsString) {
    let mut path_buf = temp_dir.path().to_path_buf();
    path_buf.push(format!("{}.{}", base, extension));

    let absolute_path = path_buf.clone().into_os_string();
    println!("{} file: {}",
             base.replace('_', " "),
             absolute_path.to_string_lossy()
    );

    (path_buf, absolute_path)
}

/// Splits each space-separated argument string into individual arguments.
pub fn prepare_args(args: Vec<&str>) -> Vec<&str> {
    args.iter().fold(vec![], |mut args: Vec<&str>, arg| {
        args.extend(arg.split(' ').filter(|arg| !arg.is_empty()));
        args
    })
}
