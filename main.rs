use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

mod error;
mod names;
mod report;
mod walk;

use error::ReportError;
use names::NameCounts;

/// Read the file's entire contents as UTF-8 text.
fn read_content(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|source| ReportError::ContentRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Target directory: optional first argument resolved against the current
/// working directory, which is also the default. Extra arguments are ignored.
fn target_dir() -> Result<PathBuf, ReportError> {
    let cwd = env::current_dir().map_err(|source| ReportError::FilesystemAccess {
        path: PathBuf::from("."),
        source,
    })?;
    Ok(match env::args_os().nth(1) {
        Some(arg) => cwd.join(arg),
        None => cwd,
    })
}

fn run() -> Result<(), ReportError> {
    let dir = target_dir()?;

    let files = walk::list_files(&dir)?;
    let first = files
        .first()
        .ok_or_else(|| ReportError::EmptyFileList(dir.clone()))?;
    let content = read_content(first)?;
    let name_list = names::name_list(&content);
    let counts = NameCounts::tally(name_list.iter().copied());
    report::generate_report(&counts)?;

    println!("list:: ");
    println!("{:?}", files);
    println!("content:: ");
    println!("{}", content);
    println!("name list:: ");
    println!("{:?}", name_list);
    println!("name count:: ");
    println!("{:?}", counts);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
