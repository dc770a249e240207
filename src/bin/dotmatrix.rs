use color_eyre::eyre;
use log::debug;

use dotmatrix_tool::cli::{self, opt::Options, scene::Scene};

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    debug!("{:?}", opt);

    let scene = Scene::load(&opt)?;
    let text = scene.render(&opt)?;
    println!("{}", text);
    Ok(())
}
