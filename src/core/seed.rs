use crate::models::Profile;

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    location: &str,
    instruments: &[&str],
    genres: &[&str],
    bio: &str,
    handle: &str,
    image_seed: &str,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        instruments: instruments.iter().map(|s| s.to_string()).collect(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
        bio: bio.to_string(),
        email: format!("{}@example.com", handle),
        portfolio: format!("https://example.com/{}", name.replace(' ', "").to_lowercase()),
        image: format!("https://picsum.photos/seed/{}/400/300", image_seed),
    }
}

/// Fixed sample musicians the catalog starts with
pub fn sample_musicians() -> Vec<Profile> {
    vec![
        sample(
            "1",
            "Eleanor Vance",
            "New York, NY",
            &["Violin", "Piano"],
            &["Classical", "Orchestral", "Cinematic"],
            "A passionate classical violinist with over 15 years of experience performing with renowned orchestras. My music aims to evoke deep emotion and tell a story without words.",
            "eleanor.v",
            "EleanorVance",
        ),
        sample(
            "2",
            "Marcus Holloway",
            "Chicago, IL",
            &["Saxophone", "Clarinet"],
            &["Jazz", "Blues", "Soul"],
            "Saxophonist bringing the smooth, soulful sounds of Chicago jazz to life. Perfect for intimate venues, weddings, and corporate events looking for a touch of class and improvisation.",
            "marcus.h",
            "MarcusHolloway",
        ),
        sample(
            "3",
            "Chloe Kim",
            "Los Angeles, CA",
            &["Acoustic Guitar", "Vocals"],
            &["Indie", "Folk", "Singer-Songwriter"],
            "I write and perform heartfelt songs about life, love, and the world around us. My acoustic sets create a warm, engaging atmosphere for coffee shops, small gatherings, and house concerts.",
            "chloe.k",
            "ChloeKim",
        ),
        sample(
            "4",
            "Leo Chen",
            "Austin, TX",
            &["Electric Guitar"],
            &["Rock", "Blues Rock", "Psychedelic"],
            "Lead guitarist with a flair for electrifying solos and groovy rhythms. My style is heavily influenced by classic rock legends, and I bring high energy to every performance.",
            "leo.c",
            "LeoChen",
        ),
        sample(
            "5",
            "Jasmine Rodriguez",
            "Miami, FL",
            &["DJ Controller", "Synthesizer"],
            &["Electronic", "House", "Techno"],
            "DJ and producer creating infectious dance beats. I specialize in reading the crowd and building a set that keeps the energy high and the dance floor packed all night long.",
            "jasmine.r",
            "JasmineR",
        ),
        sample(
            "6",
            "Samuel Jones",
            "New Orleans, LA",
            &["Trumpet", "Trombone"],
            &["Brass Band", "Funk", "Jazz"],
            "Bringing the vibrant sounds of New Orleans brass to any event. My band and I deliver an authentic, high-energy performance that is guaranteed to get people moving and smiling.",
            "samuel.j",
            "SamuelJones",
        ),
    ]
}
