use crate::analyzers::YearAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{IntegrityChecker, ParallelExtractor};
use crate::readers::ConcurrentReader;
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::TextWriter;

pub async fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Extract {
            input,
            output_file,
            to_stdout,
            max_workers,
            use_mmap,
        } => {
            let files = ConcurrentReader::discover_input_files(&input)?;
            if files.is_empty() {
                println!("No input files found");
                return Ok(());
            }

            if !to_stdout {
                println!("Extracting temperature readings...");
                println!("Input files: {}", files.len());
                println!("Workers: {}", max_workers);
            }

            let progress = ProgressReporter::new_spinner("Processing records...", to_stdout);
            let extractor = ParallelExtractor::new(max_workers).with_mmap(use_mmap);
            let (lines, report) = extractor.extract_all(files, Some(&progress)).await?;
            progress.finish_with_message(&format!("Extracted {} readings", lines.len()));

            if to_stdout {
                let writer = TextWriter::new();
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                writer.write_to(&lines, &mut lock)?;
                return Ok(());
            }

            let checker = IntegrityChecker::new();
            println!("\n{}", checker.generate_summary(&report, &[]));

            if lines.is_empty() {
                println!("No output lines to write");
                return Ok(());
            }

            let output_file = output_file.unwrap_or_else(generate_default_output_filename);
            println!("Writing {} lines to {}...", lines.len(), output_file.display());

            let writer = TextWriter::new();
            writer.write_lines(&lines, &output_file)?;

            let file_info = writer.get_file_info(&output_file)?;
            println!("\n{}", file_info.summary());

            println!("Extraction complete!");
        }

        Commands::Validate {
            input,
            max_workers,
            json,
            strict,
        } => {
            let files = ConcurrentReader::discover_input_files(&input)?;

            if !json {
                println!("Validating {} record files...", files.len());
            }

            let progress = ProgressReporter::new_spinner("Scanning records...", json);
            let extractor = ParallelExtractor::new(max_workers);
            let (observations, report) = extractor.scan_all(files).await?;
            progress.finish_with_message("Scan complete");

            let checker = IntegrityChecker::with_strict_mode(strict);
            let violations = checker.check_observations(&observations);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\n{}", checker.generate_summary(&report, &violations));

                if violations.is_empty() {
                    println!("✅ All extracted observations passed audit checks");
                } else {
                    println!("⚠️  Found {} audit flags", violations.len());
                }
            }
        }

        Commands::Info {
            file,
            sample,
            analysis_limit,
        } => {
            println!("Analyzing output file: {}", file.display());

            let writer = TextWriter::new();
            let file_info = writer.get_file_info(&file)?;

            let analyzer = YearAnalyzer::new();
            let stats = analyzer.analyze_file_with_limit(&file, analysis_limit)?;
            println!("\n{}", stats.detailed_summary());

            println!("File Details:");
            println!("{}", file_info.summary());

            if sample > 0 {
                println!("\nSample Lines (showing up to {} lines):", sample);
                match writer.read_sample_lines(&file, sample) {
                    Ok(lines) => {
                        for (i, line) in lines.iter().enumerate() {
                            println!("{}. {}", i + 1, line);
                        }
                    }
                    Err(e) => println!("Error reading sample lines: {}", e),
                }
            }
        }
    }

    Ok(())
}
