use anyhow::Result;
use clap::Parser;
use console::{style, Emoji};
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};

use dupegrep::cli::Args;
use dupegrep::progress::ProgressEvent;
use dupegrep::{analyze, scanner};

static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");
static DONE: Emoji<'_, '_> = Emoji("✅ ", "OK ");

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new().num_threads(threads).build_global().ok();
    log::debug!("using {threads} worker threads");

    let files = scanner::scan_files(&args.source, &args.exclude, args.verbose)?;

    if !args.json {
        eprintln!("{SEARCH}Scanned {} files from {}", files.len(), style(args.source.display()).cyan());
    }

    let bar = if args.json {
        None
    } else {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("{msg:.dim} [{bar:40.cyan/blue}] {pos}%")
                .unwrap()
                .progress_chars("=> "),
        );
        Some(bar)
    };

    let mut sink: Box<dyn FnMut(ProgressEvent)> = Box::new(|event: ProgressEvent| {
        if let Some(bar) = &bar {
            bar.set_position(event.percent as u64);
            bar.set_message(event.message);
        }
    });

    let result = analyze(&files, args.threshold, args.chunk_size, Some(&mut *sink))?;

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    eprintln!(
        "{DONE}{}",
        style(format!(
            "Analyzed {} files in {:.2}s",
            result.total_files,
            result.processing_time.as_secs_f64()
        ))
        .green()
    );
    eprintln!("{:<16} {}", style("Unique:").bold(), result.unique_files);
    eprintln!("{:<16} {}", style("Exact dupes:").bold(), result.full_dup_count);
    eprintln!("{:<16} {}", style("Partial dupes:").bold(), result.partial_dup_count);
    eprintln!("{:<16} {}", style("Visual dupes:").bold(), result.visual_dup_count);
    eprintln!("{:<16} {}", style("Groups:").bold(), result.duplicate_groups.len());
    eprintln!("{:<16} {}", style("Reclaimable:").bold(), HumanBytes(result.space_saved));

    Ok(())
}
