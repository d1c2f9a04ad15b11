use glsteps_core::{Config, LessonKind};

mod abs;
mod lessons;
mod logging;

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    List,
    Run(LessonKind),
}

/// Parses `glsteps [--list | LESSON]` from the arguments after the program
/// name. Extra arguments are ignored.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    match args.into_iter().next() {
        None => Ok(Command::Run(LessonKind::default())),
        Some(arg) if arg == "--list" || arg == "-l" => Ok(Command::List),
        Some(arg) => arg.parse().map(Command::Run),
    }
}

fn print_lessons() {
    for kind in LessonKind::ALL {
        println!("{:<12} {}", kind.name(), kind.summary());
    }
}

fn main() {
    let (config, warnings) = Config::load();
    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("{}", e);
    }
    for warning in warnings {
        log::warn!("{}", warning);
    }

    let kind = match parse_args(std::env::args().skip(1)) {
        Ok(Command::List) => {
            print_lessons();
            return;
        }
        Ok(Command::Run(kind)) => kind,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    if let Err(e) = lessons::run(kind, &config) {
        log::error!("Lesson `{}` failed: {}", kind, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_argument_runs_the_reflection() {
        assert_eq!(
            parse_args(args(&[])),
            Ok(Command::Run(LessonKind::Reflection))
        );
    }

    #[test]
    fn lessons_are_picked_by_name() {
        assert_eq!(
            parse_args(args(&["elements"])),
            Ok(Command::Run(LessonKind::Elements))
        );
        assert_eq!(parse_args(args(&["--list"])), Ok(Command::List));
    }

    #[test]
    fn unknown_lessons_list_the_valid_names() {
        let err = parse_args(args(&["teapot"])).unwrap_err();
        assert!(err.contains("teapot"));
        assert!(err.contains("reflection"));
    }
}
