#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = blog_pagination::run().await {
        eprintln!("blog-pagination fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
