//! The walkthrough report: one of everything, run against a tree.
//!
//! Section titles go to the `opheader` channel and everything else to
//! `results`, so silencing headers leaves just the answers.

use crate::logger::Logger;
use crate::nav::Navigator;
use crate::size::format_size;
use std::io::{Result, Write};

const PHOTOS: &str = "Documents/Personal/Photos";

fn section(log: &mut Logger, title: &str) -> Result<()> {
    write!(log.opheader(), "\n----- {} -----\n", title)
}

fn items(log: &mut Logger, paths: impl IntoIterator<Item = String>) -> Result<()> {
    for path in paths {
        write!(log.results(), "  {}\n", path)?;
    }
    Ok(())
}

pub fn write_report(nav: &Navigator, log: &mut Logger) -> Result<()> {
    write!(log.opheader(), "===== FILE SYSTEM EXPLORER =====\n")?;

    section(log, "DIRECTORY SUMMARY")?;
    write!(log.results(), "Total files: {}\n", nav.list_files("").len())?;
    write!(log.results(), "Total size: {}\n", format_size(nav.total_size("")))?;

    section(log, "FILE TYPE DISTRIBUTION")?;
    for (ext, count) in nav.count_by_type("") {
        write!(log.results(), "{}: {} files\n", ext, count)?;
    }

    section(log, "SEARCH BY EXTENSION")?;
    write!(log.results(), "PDF files:\n")?;
    items(log, nav.find_by_extension("", "pdf"))?;

    section(log, "SEARCH BY NAME")?;
    write!(log.results(), "Files containing 'project':\n")?;
    items(log, nav.find_by_name("", "project", false))?;

    section(log, "SEARCH BY NAME (INCLUDING DIRECTORIES)")?;
    write!(log.results(), "Files and directories containing 'project':\n")?;
    items(log, nav.find_by_name("", "project", true))?;

    section(log, "LARGEST FILES")?;
    write!(log.results(), "Top 5 largest files:\n")?;
    items(
        log,
        nav.find_largest("", 5)
            .into_iter()
            .map(|(path, bytes)| format!("{} ({})", path, format_size(bytes))),
    )?;

    section(log, "SPECIFIC DIRECTORY ANALYSIS")?;
    let photos = nav.list_files(PHOTOS);
    write!(
        log.results(),
        "Photos directory size: {}\n",
        format_size(nav.total_size(PHOTOS))
    )?;
    write!(log.results(), "Photos directory files: {}\n", photos.len())?;
    items(log, photos)
}
