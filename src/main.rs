//! Inlay's main application entry point and orchestration logic.
//! Loads the configuration, walks the target directory and writes every file
//! whose content changed.

use inlay::{
    cache::ContentCache,
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, InlayError, InlayResult},
    ignore::parse_ignore_patterns,
    logger::init_logger,
    processor::{ensure_output_dir, write_file, Placement, Processor},
    rule::Ruleset,
};
use walkdir::WalkDir;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration and compiles every rule (fatal on error)
/// 2. Resolves the target and output directories
/// 3. Walks the target directory, transforming candidate files
/// 4. Writes changed files in place or into the mirror directory
///
/// Failures for individual files are logged and counted; they do not stop
/// the walk or change the exit status.
fn run(args: Args) -> InlayResult<()> {
    let config = load_config(&args.config)?;
    let ruleset = Ruleset::from_config(&config.rules)?;
    if ruleset.is_empty() {
        log::warn!("No rules configured in {}", args.config.display());
    }
    let ignored = parse_ignore_patterns(&config.ignore)?;

    let source_root = args.target_dir.canonicalize().map_err(|e| {
        InlayError::ConfigError(format!(
            "invalid target directory '{}': {}",
            args.target_dir.display(),
            e
        ))
    })?;
    let placement = config.placement(&source_root);
    if let Placement::Mirror(output_root) = &placement {
        if !args.dry_run {
            ensure_output_dir(output_root)?;
        }
    }

    let processor = Processor::new(&ruleset, args.mode(), &source_root, &placement, &ignored);
    let mut cache = ContentCache::new();
    let mut updated = 0usize;
    let mut failed = 0usize;

    for dir_entry in WalkDir::new(&source_root) {
        let entry = match dir_entry {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("{}", e);
                failed += 1;
                continue;
            }
        };

        let result = match processor.process(&mut cache, entry.path()) {
            Ok(result) => result,
            Err(e) => {
                log::error!("{}", e);
                failed += 1;
                continue;
            }
        };

        for diagnostic in &result.diagnostics {
            log::log!(diagnostic.level(), "{}", diagnostic);
        }

        let Some(update) = result.update else {
            continue;
        };
        let relative = result.source.strip_prefix(&source_root).unwrap_or(&result.source);

        if args.dry_run {
            println!("[dry-run] would update: {}", relative.display());
            updated += 1;
            continue;
        }

        match write_file(&update.target, &update.content) {
            Ok(()) => {
                println!("{}: '{}'", processor.mode(), update.target.display());
                updated += 1;
            }
            Err(e) => {
                log::error!("Failed to write '{}': {}", update.target.display(), e);
                failed += 1;
            }
        }
    }

    log::debug!("Cached {} referenced files", cache.len());
    println!("Completed: {} file(s) updated, {} failed.", updated, failed);
    Ok(())
}
