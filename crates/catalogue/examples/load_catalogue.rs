use catalogue::{Catalogue, MovieFilters, Pagination};
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/movielist.csv");

    println!("Loading award catalogue from {}...\n", path.display());

    let start = Instant::now();
    let catalogue = Catalogue::load_from_file(path)
        .expect("Failed to load movie list");
    let elapsed = start.elapsed();

    let winners = catalogue.winners().count();
    let first_page = catalogue.find_movies(&MovieFilters::none(), &Pagination::default());

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalogue.len());
    println!("Winners: {}", winners);
    println!("First page: {} of {}", first_page.items.len(), first_page.total);
}
