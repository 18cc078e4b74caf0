use envsnatch::Bind;

#[derive(Bind)]
pub struct Config<T> {
    #[env("VALUE")]
    value: T,
}

fn main() {}
