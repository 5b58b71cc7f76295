// ============================================================================
// Basic Usage Example
// ============================================================================

use calc_engine::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Calculator Engine Example ===\n");

    let recorder = Arc::new(RecordingEventHandler::new());
    let mut calc = CalculatorBuilder::new()
        .with_event_handler(recorder.clone())
        .build()
        .expect("standard configuration is valid");

    // Replay a few classic key sequences
    let scripts = [
        "2 + 3 = =",
        "C 0.1 + 0.2 =",
        "C 200 + 10 % =",
        "C 5 ÷ 0 = + 1",
        "C 4 +/- √",
        "C 1234567.",
    ];

    for script in scripts {
        println!("Script: {}", script);
        for input in parse_script(script).expect("demo scripts are well-formed") {
            let display = calc.press(input);
            println!("  {:<10} -> {}", format!("{:?}", input), display);
        }
        println!();
    }

    // Memory bank
    println!("=== Memory ===");
    calc.run_script("C 12 MS C 30 M+ C 100 MS M")
        .expect("demo scripts are well-formed");

    let snapshot = calc.snapshot();
    println!("Memory open: {}", snapshot.memory_view_open);
    for (i, value) in snapshot.memory.iter().enumerate() {
        println!("  [{}] {}", i, value);
    }
    println!("Recall: {}", calc.press(MemoryAction::Recall));

    // European separators
    println!("\n=== Locale ===");
    let mut european = CalculatorBuilder::from_config(CalculatorConfig::european())
        .with_event_handler(Arc::new(LoggingEventHandler))
        .build()
        .expect("european configuration is valid");
    println!(
        "1234.5 × 1000 = {}",
        european.run_script("1234.5 × 1000 =").expect("demo scripts are well-formed")
    );

    println!("\nEvents recorded: {}", recorder.len());
}
