//! morel: a categorical Naive Bayes classifier for the mushroom dataset.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use morel::interview::interview;
use morel::{AddK, Assignment, Classifier, Dataset, Estimator, Glossary, MorelError, NaiveBayesEstimator,
            NaiveBayesModel, Signature};

#[derive(Parser, Debug)]
#[command(author, version, about = "Naive Bayes classifier for categorical data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for observations interactively and report the probability of the target class
    Interview {
        #[command(flatten)]
        train: TrainArgs,

        /// Class value whose probability is reported
        #[arg(long, default_value = "p")]
        target: String,
    },

    /// Print the posterior over the class for the given observations
    Query {
        #[command(flatten)]
        train: TrainArgs,

        /// An observation, as feature=code. May be repeated.
        #[arg(short = 'o', long = "observe", value_name = "FEATURE=CODE", value_parser = parse_observation)]
        observations: Vec<(String, String)>,
    },

    /// Train on part of the data and report accuracy on the rest
    Evaluate {
        #[command(flatten)]
        train: TrainArgs,

        /// Fraction of rows held out for testing
        #[arg(long, default_value_t = 0.2)]
        holdout: f64,

        /// Seed for shuffling the rows
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Args, Debug)]
struct TrainArgs {
    /// CSV file with a header row
    #[arg(long, value_name = "CSV")]
    data: PathBuf,

    /// Name of the class column
    #[arg(long, default_value = "poisonous")]
    class: String,

    /// Additive smoothing constant
    #[arg(long, default_value_t = 1.0)]
    smoothing: f64,
}

impl TrainArgs {
    fn estimator(&self) -> morel::Result<NaiveBayesEstimator<AddK>> {
        Ok(NaiveBayesEstimator::new(&self.class, AddK::new(self.smoothing)?))
    }

    fn train(&self) -> morel::Result<NaiveBayesModel> {
        let data = Dataset::from_path(&self.data)?;
        self.estimator()?.estimate(&data)
    }
}

fn parse_observation(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((feature, code)) if !feature.is_empty() && !code.is_empty() => {
            Ok((feature.trim().to_string(), code.trim().to_string()))
        }
        _ => Err(format!("expected feature=code, got {:?}", s)),
    }
}

fn main() -> morel::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Interview { train, target } => run_interview(&train, &target),
        Command::Query { train, observations } => run_query(&train, &observations),
        Command::Evaluate { train, holdout, seed } => run_evaluate(&train, holdout, seed),
    }
}

fn run_interview(args: &TrainArgs, target: &str) -> morel::Result<()> {
    let model = args.train()?;
    let glossary = Glossary::mushroom()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    loop {
        let observations = interview(&glossary, &mut input, &mut output)?;
        let posterior = model.posterior(&observations)?;
        let percent = 100.0 * posterior.prob(target)?;

        writeln!(output)?;
        writeln!(output, "THERE IS A PROBABILITY OF {:.2}% THAT THIS MUSHROOM IS POISONOUS.", percent)?;
        write!(output, "Press enter to start over.")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
    }
}

fn run_query(args: &TrainArgs, observations: &[(String, String)]) -> morel::Result<()> {
    let model = args.train()?;
    let evidence: Assignment = observations.iter().map(|(f, c)| (f.as_str(), c.as_str())).collect();

    let posterior = model.posterior(&evidence)?;
    for (value, prob) in posterior.iter() {
        println!("{}\t{}", value, prob);
    }
    Ok(())
}

fn run_evaluate(args: &TrainArgs, holdout: f64, seed: u64) -> morel::Result<()> {
    let data = Dataset::from_path(&args.data)?;
    let signature = Signature::extract(&data);

    let mut rng = StdRng::seed_from_u64(seed);
    let (train, test) = data.split(holdout, &mut rng)?;
    if train.is_empty() || test.is_empty() {
        return Err(MorelError::NotEnoughData);
    }

    let model = args.estimator()?.estimate_with_signature(&train, signature)?;
    let accuracy = model.evaluate(&test)?;
    info!(train = train.len(), test = test.len(), seed, "evaluated");

    println!("accuracy: {:.4} ({} training rows, {} test rows)", accuracy, train.len(), test.len());
    Ok(())
}
