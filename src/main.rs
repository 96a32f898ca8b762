use eyre::Result;

fn main() -> Result<()> {
    rehashplot::entrypoints::run()
}
