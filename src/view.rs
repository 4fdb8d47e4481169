use nearby_core::view::{ErrorPage, ErrorView, OnSelectPlace, PlaceList, PlaceListView};

/// Renders the place listing on the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleView;

impl PlaceListView for ConsoleView {
    fn render_places(&self, config: &PlaceList<'_>, _on_select: OnSelectPlace) {
        println!("# {}", config.title);
        if config.is_loading {
            println!("{} ...", config.loading_text);
            return;
        }
        if config.places.is_empty() {
            println!("{}", config.fallback_text);
            return;
        }
        for (nr, place) in config.places.iter().enumerate() {
            println!("{:>3}. {}", nr + 1, place.title);
            if let Some(description) = &place.description {
                println!("     {description}");
            }
        }
    }
}

impl ErrorView for ConsoleView {
    fn render_error(&self, config: &ErrorPage<'_>) {
        eprintln!("{}", config.title);
        eprintln!("{}", config.message);
    }
}
