use clap::{App, Arg, ArgMatches};

/// Knobs of a validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub samples: usize,
    pub seed: u32,
    pub bins: usize,
    pub tolerance: f32,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            samples: 1 << 20,
            seed: 1,
            bins: 16,
            tolerance: 0.05,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Settings {
        let defaults = Settings::default();
        Settings {
            samples: value_t!(matches, "samples", usize).unwrap_or(defaults.samples),
            seed: value_t!(matches, "seed", u32).unwrap_or(defaults.seed),
            bins: value_t!(matches, "bins", usize).unwrap_or(defaults.bins),
            tolerance: value_t!(matches, "tolerance", f32).unwrap_or(defaults.tolerance),
            verbose: matches.is_present("verbose"),
        }
    }
}

fn is_positive<T: ::std::str::FromStr + PartialOrd + Default>(value: String) -> Result<(), String> {
    match value.parse::<T>() {
        Ok(ref parsed) if *parsed > T::default() => Ok(()),
        _ => Err(format!("expected a positive number, got \"{}\"", value)),
    }
}

fn is_u32(value: String) -> Result<(), String> {
    value
        .parse::<u32>()
        .map(|_| ())
        .map_err(|_| format!("expected an unsigned 32 bit number, got \"{}\"", value))
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("validate")
        .version("0.1")
        .about("Checks the sampling kernels for unit length, support and uniformity")
        .arg(
            Arg::with_name("samples")
                .long("samples")
                .short("n")
                .help("Number of samples per check")
                .takes_value(true)
                .validator(is_positive::<usize>),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .short("s")
                .help("Seed of the random number generator")
                .takes_value(true)
                .validator(is_u32),
        )
        .arg(
            Arg::with_name("bins")
                .long("bins")
                .short("b")
                .help("Number of bins in the distribution histograms")
                .takes_value(true)
                .validator(is_positive::<usize>),
        )
        .arg(
            Arg::with_name("tolerance")
                .long("tolerance")
                .short("t")
                .help("Accepted relative deviation of histograms and estimates")
                .takes_value(true)
                .validator(is_positive::<f32>),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .help("log debug information"),
        )
}

pub fn parse_args() -> Settings {
    Settings::from_matches(&app().get_matches())
}
