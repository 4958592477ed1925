use pidscan_core::classify::{Category, PatternTable};
use pidscan_core::error::PidscanError;

pub fn list() -> Result<(), PidscanError> {
    println!("Output columns, in order:\n");
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("  {:>2}  {}", i + 1, category.label());
    }
    println!();
    println!("Classification priority follows the pattern table, not this order.");
    println!("Run 'pidscan categories patterns' to see it.");
    Ok(())
}

pub fn patterns() -> Result<(), PidscanError> {
    println!("Classification pattern table, in priority order.");
    println!("The first category whose pattern matches claims the candidate.\n");

    for rule in PatternTable::builtin().rules() {
        println!("{}", rule.category.label());
        for pattern in &rule.patterns {
            println!("    {}", pattern.as_str());
        }
        println!();
    }

    println!("Unmatched fallbacks: process-unit keywords -> Drawing_Name,");
    println!("a leading drawing-number token -> PID #.");
    Ok(())
}
