use crate::market::types::DelayedQuote;
use crate::time::format_local_millis;
use colored::Colorize;
use std::io::{self, Write};

pub fn print_delayed_quote(out: &mut impl Write, quote: &DelayedQuote) -> io::Result<()> {
    writeln!(out, "{}", format!("\n{} Summary:", quote.symbol).cyan())?;
    writeln!(out, "\tDelayedPrice: {}", quote.delayed_price)?;
    writeln!(out, "\tHigh: {}", quote.high)?;
    writeln!(out, "\tLow: {}", quote.low)?;
    // 0 means the upstream sent no timestamp.
    if quote.delayed_price_time > 0 {
        writeln!(out, "\tPrice Time: {}", format_local_millis(quote.delayed_price_time))?;
    }
    Ok(())
}
