/// Built-in fallback catalog
///
/// Served whenever the catalog API is unreachable or returns a malformed
/// page, and always contributing the head of the trending shelf. The themed
/// entries carry their artwork as absolute URLs; everything else renders
/// from a placeholder.
use crate::models::{CatalogItem, CategorySet};
use chrono::NaiveDate;

fn entry(id: u64, title: &str, overview: &str, vote_average: f64, release_date: &str) -> CatalogItem {
    CatalogItem {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        poster_path: None,
        backdrop_path: None,
        vote_average,
        vote_count: None,
        release_date: NaiveDate::parse_from_str(release_date, "%Y-%m-%d").ok(),
        image_override: None,
    }
}

fn themed_entry(
    id: u64,
    title: &str,
    overview: &str,
    vote_average: f64,
    release_date: &str,
    artwork: &str,
) -> CatalogItem {
    CatalogItem {
        image_override: Some(artwork.to_string()),
        ..entry(id, title, overview, vote_average, release_date)
    }
}

/// The item shown in the hero slot when the featured lookup falls back
pub fn seed_featured() -> CatalogItem {
    seed_trending().remove(0)
}

/// The complete fallback set, one shelf per category
pub fn seed_catalog() -> CategorySet {
    CategorySet {
        trending: seed_trending(),
        popular: seed_popular(),
        top_rated: seed_top_rated(),
        action: seed_action(),
        comedy: seed_comedy(),
        horror: seed_horror(),
    }
}

/// Trending seed; the first five entries also head the live trending mix
pub fn seed_trending() -> Vec<CatalogItem> {
    vec![
        themed_entry(
            1001,
            "Pokémon Detective Pikachu",
            "In a world where people collect Pokémon to do battle, a boy comes across an intelligent talking Pikachu who seeks to be a detective.",
            8.1,
            "2019-05-10",
            "https://images.pexels.com/photos/1716861/pexels-photo-1716861.jpeg",
        ),
        themed_entry(
            1002,
            "Pokémon: The First Movie - Mewtwo Strikes Back",
            "Scientists genetically create a new Pokémon, Mewtwo, but the results are horrific and disastrous. Ash and his friends must fight against this powerful artificial Pokémon.",
            7.8,
            "1998-07-18",
            "https://images.unsplash.com/photo-1609372332255-611485350f25",
        ),
        themed_entry(
            1003,
            "Pokémon: The Movie 2000",
            "Ash Ketchum must gather the three spheres of fire, ice and lightning in order to restore balance to the Orange Islands.",
            7.6,
            "1999-07-17",
            "https://images.unsplash.com/photo-1638964758061-117853a20865",
        ),
        themed_entry(
            1004,
            "Pokémon 3: The Movie - Spell of the Unown",
            "Young Molly Hale's father disappears while investigating the mysterious Unown. The Unown create a crystal palace and make Molly's wishes come true.",
            7.4,
            "2000-07-08",
            "https://images.pexels.com/photos/31002073/pexels-photo-31002073.jpeg",
        ),
        themed_entry(
            1005,
            "Pokémon: Zoroark - Master of Illusions",
            "A greedy businessman tries to take over a city with the help of a legendary Pokémon, and only the true legendary Pokémon Zoroark can stop him.",
            7.5,
            "2010-07-10",
            "https://images.pexels.com/photos/32344214/pexels-photo-32344214.jpeg",
        ),
        entry(
            1,
            "Stranger Things",
            "When a young boy vanishes, a small town uncovers a mystery involving secret experiments, terrifying supernatural forces, and one strange little girl.",
            8.7,
            "2016-07-15",
        ),
        entry(
            2,
            "The Crown",
            "Follows the political rivalries and romance of Queen Elizabeth II's reign and the events that shaped the second half of the twentieth century.",
            8.6,
            "2016-11-04",
        ),
    ]
}

fn seed_popular() -> Vec<CatalogItem> {
    vec![
        entry(
            6,
            "Wednesday",
            "Smart, sarcastic and a little dead inside, Wednesday Addams investigates a murder spree while making new friends — and foes — at Nevermore Academy.",
            8.5,
            "2022-11-23",
        ),
        entry(
            7,
            "Squid Game",
            "Hundreds of cash-strapped players accept a strange invitation to compete in children's games for a tempting prize, but the stakes are deadly.",
            8.0,
            "2021-09-17",
        ),
        entry(
            8,
            "Money Heist",
            "An unusual group of robbers attempt to carry out the most perfect robbery in Spanish history - stealing 2.4 billion euros from the Royal Mint of Spain.",
            8.2,
            "2017-05-02",
        ),
    ]
}

fn seed_top_rated() -> Vec<CatalogItem> {
    vec![
        entry(
            11,
            "Breaking Bad",
            "A high school chemistry teacher diagnosed with inoperable lung cancer turns to manufacturing and selling methamphetamine to secure his family's future.",
            9.5,
            "2008-01-20",
        ),
        entry(
            12,
            "The Shawshank Redemption",
            "Framed in the 1940s for the double murder of his wife and her lover, upstanding banker Andy Dufresne begins a new life at the Shawshank prison.",
            9.3,
            "1994-09-23",
        ),
    ]
}

fn seed_action() -> Vec<CatalogItem> {
    vec![
        entry(
            9,
            "The Witcher",
            "Geralt of Rivia, a mutated monster-hunter for hire, journeys toward his destiny in a turbulent world where people often prove more wicked than beasts.",
            8.2,
            "2019-12-20",
        ),
        entry(
            10,
            "Daredevil",
            "A blind lawyer by day, vigilante by night. Matt Murdock fights the crime of New York as Daredevil.",
            8.6,
            "2015-04-10",
        ),
    ]
}

fn seed_comedy() -> Vec<CatalogItem> {
    vec![
        entry(
            13,
            "Brooklyn Nine-Nine",
            "A talented but carefree detective and his diverse, lovable colleagues solve crimes in Brooklyn's 99th precinct under a newly appointed, by-the-book captain.",
            8.4,
            "2013-09-17",
        ),
        entry(
            14,
            "The Office",
            "A mockumentary on the everyday lives of the employees of the Scranton, Pennsylvania branch of the Dunder Mifflin paper company.",
            8.9,
            "2005-03-24",
        ),
    ]
}

fn seed_horror() -> Vec<CatalogItem> {
    vec![
        entry(
            15,
            "The Haunting of Hill House",
            "Flashing between past and present, a fractured family confronts haunting memories of their old home and the terrifying events that drove them from it.",
            8.6,
            "2018-10-12",
        ),
        entry(
            16,
            "Midnight Mass",
            "The arrival of a charismatic young priest brings glorious miracles, ominous mysteries and renewed religious fervor to a dying town.",
            7.7,
            "2021-09-24",
        ),
    ]
}
