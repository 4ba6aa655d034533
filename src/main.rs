use anyhow::Result;
use recolor_icons::batch;
use recolor_icons::config::Config;

fn main() -> Result<()> {
    batch::run(&Config::default())
}
