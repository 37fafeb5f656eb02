//! `edu-catalog` command line: inspect a saved platform or write a demo one

use anyhow::Context;
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgMatches, Command};
use edu_catalog::{
    telemetry, AccessContext, Actor, Address, CatalogCodec, CatalogConfig, Course, CourseSpec,
    LogNotifier, Notifier, Platform, Role,
};
use std::path::PathBuf;
use std::sync::Arc;

fn cli() -> Command {
    let file_arg = || {
        Arg::new("file")
            .value_parser(value_parser!(PathBuf))
            .help("Platform JSON file (defaults to storage.data_file)")
    };

    Command::new("edu-catalog")
        .version(edu_catalog::VERSION)
        .about("Educational course catalog")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("summary")
                .about("Print the platform and its courses")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("top")
                .about("Print the courses with most students")
                .arg(file_arg())
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .default_value("3")
                        .value_parser(value_parser!(usize))
                        .help("Number of courses"),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Write a sample platform")
                .arg(file_arg()),
        )
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    telemetry::init(&config.logging)?;

    let codec = CatalogCodec::new().with_notifier(Arc::new(LogNotifier));
    let file_of = |args: &ArgMatches| {
        args.get_one::<PathBuf>("file")
            .cloned()
            .unwrap_or_else(|| config.storage.data_file.clone())
    };

    match matches.subcommand() {
        Some(("summary", args)) => {
            let platform = codec.load(file_of(args))?;
            println!("{platform}");
            for (i, course) in platform.courses().iter().enumerate() {
                println!(
                    "  {i}. {course} ({} students, {} days)",
                    course.students().len(),
                    course.duration_days()
                );
            }
        }
        Some(("top", args)) => {
            let platform = codec.load(file_of(args))?;
            let count = args.get_one::<usize>("count").copied().unwrap_or(3);
            for course in platform.top_courses(count) {
                println!("{:>4}  {}", course.students().len(), course.title());
            }
        }
        Some(("demo", args)) => {
            let path = file_of(args);
            let platform = demo_platform()?;
            for course in platform.courses() {
                println!("{}", course.teach());
            }
            codec
                .save(&platform, &path, config.storage.pretty)
                .with_context(|| format!("writing demo platform to {}", path.display()))?;
            println!("{platform}");
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
        None => anyhow::bail!("no subcommand given"),
    }
    Ok(())
}

fn demo_platform() -> anyhow::Result<Platform> {
    let ctx = AccessContext::new();
    let _admin = ctx.acting_as(Actor::new("admin_user", Role::Admin));

    let date = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid date {y}-{m}-{d}"))
    };
    let names = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

    let mut platform = Platform::new(
        "Edu Platform",
        Address::new("edu-platform.com", "https://www.edu-platform.com"),
    );
    let courses = [
        (
            "programming",
            CourseSpec {
                title: "Algorithms in Python".into(),
                start_date: date(2024, 9, 1)?,
                end_date: date(2024, 12, 20)?,
                instructor: "Ivan Petrov".into(),
                students: names(&["anna", "boris", "clara", "denis"]),
                topics: names(&["sorting", "graphs", "dynamic programming"]),
            },
        ),
        (
            "design",
            CourseSpec {
                title: "UI Basics".into(),
                start_date: date(2024, 10, 1)?,
                end_date: date(2024, 11, 30)?,
                instructor: "Maria Sidorova".into(),
                students: names(&["eva", "fedor", "gleb"]),
                topics: names(&["composition", "color", "typography"]),
            },
        ),
        (
            "science",
            CourseSpec {
                title: "Physics Lab".into(),
                start_date: date(2025, 2, 1)?,
                end_date: date(2025, 5, 31)?,
                instructor: "Oleg Ivanov".into(),
                students: names(&["hanna", "igor"]),
                topics: names(&["mechanics", "optics"]),
            },
        ),
    ];
    for (kind, spec) in courses {
        let course = Course::from_type(kind, spec, None)?.with_notifier(Arc::clone(&notifier));
        platform.add_course(&ctx, course)?;
    }
    Ok(platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn missing_subcommand_is_rejected_by_parser() {
        assert!(cli().try_get_matches_from(["edu-catalog"]).is_err());

        let matches = cli()
            .try_get_matches_from(["edu-catalog", "top", "-n", "2", "p.json"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "top");
        assert_eq!(args.get_one::<usize>("count"), Some(&2));
    }

    #[test]
    fn demo_platform_has_one_course_per_kind() {
        let platform = demo_platform().unwrap();
        let kinds: Vec<&str> = platform
            .courses()
            .iter()
            .map(|c| c.kind().short_name())
            .collect();
        assert_eq!(kinds, ["programming", "design", "science"]);
        assert_eq!(platform.top_courses(1)[0].title(), "Algorithms in Python");
        assert_eq!(
            platform.courses()[2].field(),
            Some(&["Physics".to_string(), "Mathematics".to_string()][..])
        );
    }
}
