//! ActivityBoard
//!
//! Page-load bootstrap: construct the board once, run the initial load,
//! and print the rendered surface.

use tracing::info;

use ActivityBoard::board::ActivityBoard as Board;
use ActivityBoard::config::Settings;
use ActivityBoard::utils::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the board.
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Mounting activity board ({})", ActivityBoard::info());

    let board = Board::mount(settings)?;

    // The page-load fetch.
    board.load_and_render().await;

    println!("{}", board.list_html().await);
    for option in board.select_options().await {
        info!(value = %option.value, label = %option.label, "Select option");
    }

    Ok(())
}
