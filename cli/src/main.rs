mod app;
mod config;
mod tracing;

fn main() -> anyhow::Result<()> {
    app::run()
}
