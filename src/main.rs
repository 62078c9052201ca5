//! CLI for cvforge - Markdown-driven resume regeneration

use clap::{Parser, Subcommand};
use cvforge::{
    analyzer, AnalyzeOptions, CvGenerator, DocxAnalyzer, GenerateOptions, TemplateBuilder,
    TemplateOptions, DEFAULT_SKILLS_HEADING,
};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the styles defined in a document
    Inspect {
        /// Input DOCX file path
        source: PathBuf,
    },
    /// Audit manual formatting and extract the style mapping
    Analyze {
        /// Input DOCX file path
        source: PathBuf,

        /// Where to write the style mapping
        #[arg(long, default_value = "styles.json")]
        styles: PathBuf,

        /// Where to write the audit report
        #[arg(long, default_value = "audit_report.txt")]
        report: PathBuf,

        /// Substring identifying a section heading paragraph (case-insensitive)
        #[arg(long, default_value = "PROFIL")]
        section_marker: String,

        /// Substring identifying a job entry paragraph
        #[arg(long)]
        job_marker: Option<String>,
    },
    /// Strip the source document into a reusable template
    Template {
        /// Input DOCX file path
        source: PathBuf,

        /// Style mapping produced by the analyze step
        #[arg(long, default_value = "styles.json")]
        styles: PathBuf,

        /// Where to write the template document
        #[arg(long, default_value = "template_master.docx")]
        output: PathBuf,
    },
    /// Fill the template from a Markdown resume
    Generate {
        /// Input Markdown file path
        markdown: PathBuf,

        /// Template document produced by the template step
        #[arg(long, default_value = "template_master.docx")]
        template: PathBuf,

        /// Style mapping produced by the analyze step
        #[arg(long, default_value = "styles.json")]
        styles: PathBuf,

        /// Where to write the generated resume
        #[arg(long, default_value = "cv_generated.docx")]
        output: PathBuf,

        /// Heading of the skills section in the Markdown source
        #[arg(long, default_value = DEFAULT_SKILLS_HEADING)]
        skills_heading: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cvforge=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cvforge=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(command: Command) -> cvforge::Result<()> {
    match command {
        Command::Inspect { source } => {
            for entry in analyzer::inspect(&source)? {
                println!("{}\t{}", entry.id, entry.name.as_deref().unwrap_or("-"));
            }
            Ok(())
        }
        Command::Analyze {
            source,
            styles,
            report,
            section_marker,
            job_marker,
        } => {
            let analyzer = DocxAnalyzer::new(AnalyzeOptions {
                source,
                styles_out: styles,
                report_out: report,
                section_marker,
                job_marker,
            });
            analyzer.analyze().map(|_| ())
        }
        Command::Template {
            source,
            styles,
            output,
        } => TemplateBuilder::new(TemplateOptions {
            source,
            styles,
            output,
        })
        .build(),
        Command::Generate {
            markdown,
            template,
            styles,
            output,
            skills_heading,
        } => CvGenerator::new(GenerateOptions {
            markdown,
            template,
            styles,
            output,
            skills_heading,
        })
        .generate(),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args.command) {
        error!("{e}");
        std::process::exit(1);
    }
}
