use envsnatch::Bind;

#[derive(Bind)]
pub struct Config {
    #[env("KAFKA_TOPICS")]
    topics: Vec<String>,
    #[env("PORT,optional")]
    port: Option<u16>,
}

fn main() {}
