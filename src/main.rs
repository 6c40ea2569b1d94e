use clap::{Args, Parser, Subcommand};
use loanflow::application::confirmation::{ConfirmationFlow, Destination, redirect_after};
use loanflow::application::intake::{IntakeService, quote_amount};
use loanflow::config::FlowConfig;
use loanflow::domain::application::ApplicationForm;
use loanflow::domain::emi::{calculate_emi, round_to_rupee};
use loanflow::domain::otp::{OtpCode, SubmitOutcome};
use loanflow::domain::ports::{CodeSource, CodeSourceBox, HandoffStoreBox};
use loanflow::domain::words::number_to_words_indian;
use loanflow::error::LoanError;
use loanflow::infrastructure::codes::{FixedCodeSource, RandomCodeSource};
use loanflow::infrastructure::json_file::JsonFileHandoffStore;
use loanflow::interfaces::csv::application_reader::ApplicationReader;
use loanflow::interfaces::csv::screening_writer::{ScreeningRecord, ScreeningWriter};
use loanflow::logging::init_tracing;
use miette::{IntoDiagnostic, Result, bail};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with flow settings (rates, attempts, redirect targets)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Annual interest rate in percent, overrides the config file
    #[arg(long, global = true)]
    rate: Option<Decimal>,

    /// Loan tenure in years, overrides the config file
    #[arg(long, global = true)]
    tenure: Option<u32>,

    /// Delay before redirecting after verification, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct FormArgs {
    /// Applicant's full name
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    /// Permanent Account Number, upper-cased before checking
    #[arg(long)]
    pan: String,

    /// Loan amount in whole rupees
    #[arg(long)]
    amount: String,
}

impl From<FormArgs> for ApplicationForm {
    fn from(args: FormArgs) -> Self {
        ApplicationForm::new(args.name, args.email, args.pan, args.amount)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Check the application fields and print any errors
    Validate(FormArgs),
    /// Print an amount in words (Indian numbering)
    Words {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Print the estimated monthly installment
    Emi { amount: Decimal },
    /// Print the amount in words together with the EMI estimate
    Quote { amount: String },
    /// Submit the application form and store it for confirmation
    Apply {
        #[command(flatten)]
        form: FormArgs,

        /// Session file shared with `confirm`
        #[arg(long)]
        session: PathBuf,
    },
    /// Verify the pending application with a one-time code read from stdin
    Confirm {
        /// Session file written by `apply`
        #[arg(long)]
        session: PathBuf,

        /// Use this code instead of a random one
        #[arg(long)]
        code: Option<String>,
    },
    /// Screen a CSV file of applications
    Screen {
        /// CSV with columns full_name,email,pan,loan_amount
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => FlowConfig::from_file(path).into_diagnostic()?,
        None => FlowConfig::default(),
    };
    if let Some(rate) = cli.rate {
        config.annual_rate_percent = rate;
    }
    if let Some(tenure) = cli.tenure {
        config.tenure_years = tenure;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.redirect_delay_ms = delay_ms;
    }
    let terms = config.emi_terms();

    match cli.command {
        Command::Validate(args) => {
            let errors = ApplicationForm::from(args).normalized().field_errors();
            if errors.is_empty() {
                println!("ok");
            }
            for error in errors {
                println!("{}: {}", error.field(), error);
            }
        }
        Command::Words { value } => {
            println!("{}", number_to_words_indian(value));
        }
        Command::Emi { amount } => {
            let emi = calculate_emi(amount, &terms).into_diagnostic()?;
            println!("{}", round_to_rupee(emi));
        }
        Command::Quote { amount } => match quote_amount(&amount, &terms) {
            Ok(quote) => {
                println!("Amount in words: {}", quote.amount_in_words);
                println!(
                    "Estimated EMI: {} per month at {}% for {} years",
                    quote.monthly_installment, terms.annual_rate_percent, terms.tenure_years
                );
            }
            Err(LoanError::Validation(errors)) => {
                for error in errors {
                    println!("{}: {}", error.field(), error);
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        },
        Command::Apply { form, session } => {
            let store: HandoffStoreBox = Box::new(JsonFileHandoffStore::new(session));
            let service = IntakeService::new(store, terms);
            match service.submit(form.into()).await {
                Ok(submission) => {
                    println!(
                        "Application saved for {}",
                        submission.application.full_name()
                    );
                    println!("Amount in words: {}", submission.quote.amount_in_words);
                    println!(
                        "Estimated EMI: {} per month at {}% for {} years",
                        submission.quote.monthly_installment,
                        terms.annual_rate_percent,
                        terms.tenure_years
                    );
                }
                Err(LoanError::Validation(errors)) => {
                    for error in errors {
                        println!("{}: {}", error.field(), error);
                    }
                    bail!("Application rejected");
                }
                Err(e) => return Err(e).into_diagnostic(),
            }
        }
        Command::Confirm { session, code } => {
            let codes: CodeSourceBox = match code {
                Some(code) => Box::new(FixedCodeSource::new(
                    OtpCode::parse(&code).into_diagnostic()?,
                )),
                None => Box::new(RandomCodeSource),
            };
            let store: HandoffStoreBox = Box::new(JsonFileHandoffStore::new(session));
            let destination = run_confirmation(store, codes.as_ref(), &config).await?;
            let destination = redirect_after(config.redirect_delay(), destination).await;
            println!("Redirecting to {destination}");
        }
        Command::Screen { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = ApplicationReader::new(file);
            let mut records = Vec::new();
            for form_result in reader.applications() {
                match form_result {
                    Ok(form) => {
                        records.push(ScreeningRecord::screen(form, &terms).into_diagnostic()?);
                    }
                    Err(e) => {
                        eprintln!("Error reading application: {}", e);
                    }
                }
            }

            let stdout = io::stdout();
            let mut writer = ScreeningWriter::new(stdout.lock());
            writer.write_records(records).into_diagnostic()?;
        }
    }

    Ok(())
}

/// Runs the guess loop on stdin until the challenge finishes.
async fn run_confirmation(
    store: HandoffStoreBox,
    codes: &dyn CodeSource,
    config: &FlowConfig,
) -> Result<Destination> {
    let mut flow = ConfirmationFlow::start(store, codes, config)
        .await
        .into_diagnostic()?;

    println!(
        "A verification code has been sent to {} (demo code: {})",
        flow.pending().email,
        flow.demo_code()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("Enter OTP:");
        let Some(line) = lines.next_line().await.into_diagnostic()? else {
            bail!("Verification abandoned before a code was accepted");
        };

        match flow.submit(&line).await {
            Ok(SubmitOutcome::Verified) => {
                println!("OTP verified. Your loan application has been submitted.");
            }
            Ok(SubmitOutcome::Retry { remaining }) => {
                println!("Incorrect OTP. {remaining} attempt(s) remaining.");
            }
            Ok(SubmitOutcome::Exhausted) => {
                println!("Too many incorrect attempts. Verification failed.");
            }
            Err(LoanError::MalformedCode) => {
                println!("{}", LoanError::MalformedCode);
            }
            Err(e) => return Err(e).into_diagnostic(),
        }

        if let Some(destination) = flow.destination() {
            return Ok(destination);
        }
    }
}
