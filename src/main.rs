use anyhow::Result;

fn main() -> Result<()> {
    studybook::cli::run()
}
