use rand::seq::SliceRandom;

/// The fixed joke pool. Each entry was retrieved from
/// <https://www.rd.com/jokes/computer/>.
pub const JOKE_BANK: [&str; 5] = [
    "Have you heard the band \"1023 Megabytes\"? They're pretty good, but they don't have a gig \
     just yet.",
    "Don't use \"beef stew\" as a computer password. It's not stroganoff.",
    "Why did the computer show up at work late? It had a hard drive.",
    "What do you call an iPhone that isn't kidding around? Dead Siri-ous!",
    "Did you hear about the monkeys who shared an Amazon account? They were Prime mates.",
];

/// Picks one joke uniformly at random from [`JOKE_BANK`].
///
/// # Example
/// ```
/// use confab::extras::jokes::{random_joke, JOKE_BANK};
///
/// assert!(JOKE_BANK.contains(&random_joke()));
/// ```
#[must_use]
pub fn random_joke() -> &'static str {
    JOKE_BANK.choose(&mut rand::thread_rng())
             .copied()
             .unwrap_or(JOKE_BANK[0])
}
