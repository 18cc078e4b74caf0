use envsnatch::Bind;

#[derive(Bind)]
pub struct Config {
    #[env()]
    empty: String,
    #[env(required)]
    unknown: String,
    #[env("FIRST")]
    #[env("SECOND")]
    twice: String,
}

fn main() {}
