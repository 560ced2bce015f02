use std::io::Write;

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use rsdataset::{repo::GitAnnex, Location};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("create")
        .about("Create a new dataset")
        .arg(
            Arg::with_name("location")
                .help("Where the dataset shall be created [default: current directory]"),
        )
        .arg(
            Arg::with_name("description")
                .long("description")
                .takes_value(true)
                .value_name("TEXT")
                .env("RSDATASET_DESCRIPTION")
                .help("Describe the new repository to git-annex"),
        )
        .arg(
            Arg::with_name("git")
                .long("git")
                .takes_value(true)
                .value_name("PROGRAM")
                .env("RSDATASET_GIT")
                .default_value("git")
                .help("The git executable to run"),
        )
}

pub(crate) fn run(app: &mut App, create_matches: &ArgMatches) -> Result<()> {
    let location = match create_matches.value_of("location") {
        Some(location) => location.parse::<Location>()?,
        None => Location::Default,
    };

    let mut backend = GitAnnex::new();
    if let Some(git) = create_matches.value_of_os("git") {
        backend = backend.git(git);
    }
    if let Some(description) = create_matches.value_of("description") {
        backend = backend.description(description);
    }

    let dataset = rsdataset::create_with(&backend, location)?;

    writeln!(app, "Created dataset in {}", dataset.path().display())?;

    Ok(())
}
