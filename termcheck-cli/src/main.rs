use termcheck::utils::{Style, Terminal, checks};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), termcheck::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("------------------------------------------------------------");
    println!("                      termcheck demo                        ");
    println!("------------------------------------------------------------");

    let mut term = Terminal::stdio();

    let name = term.get(
        "Three letter nickname",
        Style::Basic,
        &[
            checks::custom(checks::length(3), "Exactly three characters"),
            checks::custom(checks::consists_of("a-zA-Z")?, "Letters only"),
        ],
    )?;

    let pin = term.get(
        "PIN",
        Style::Masked,
        &[
            checks::custom(checks::length(4), "Four digits"),
            checks::custom(checks::numeric::<u16>(), "Digits only"),
        ],
    )?;

    let age = term.ask(
        "How old are you",
        Style::Basic,
        &[checks::custom(checks::range::<u8>(1, 130), "Between 1 and 130")],
    )?;

    let confirm = term.ask(
        "Save these answers (y/n)",
        Style::Instant,
        &[checks::is(["y", "n"])],
    )?;

    tracing::info!(%name, age = %age, "answers collected");

    if confirm.eq_ignore_ascii_case("y") {
        println!("Saved {} ({}), PIN of {} digits.", name, age, pin.len());
    } else {
        println!("Nothing saved.");
    }

    Ok(())
}
