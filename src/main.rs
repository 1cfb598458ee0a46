fn main() -> anyhow::Result<()> {
    pifrac::run()
}
