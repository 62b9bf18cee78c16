use tracing_subscriber::EnvFilter;
use vfs_tree::{FsBackend, TreeFS, VfsError};

fn main() -> vfs_tree::Result<()> {
    // RUST_LOG=debug shows every cd/rm span
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // root directory labeled `root`, CWD is `/`
    let mut fs = TreeFS::new();

    // creates `/docs` and `/readme.md`
    fs.mkdir("docs")?;
    fs.touch("readme.md")?;

    // change CWD to `/docs` and fill it
    fs.cd("docs")?;
    fs.mkdir("drafts")?;
    fs.touch("first.txt")?;
    println!("{}: {:?}", fs.pwd(), fs.ls().collect::<Vec<_>>());

    // `../` climbs one level before descending
    fs.cd("../docs/drafts")?;
    println!("now in {}", fs.pwd());

    // only two levels to climb from here
    if let Err(err) = fs.cd("../../../") {
        if let Some(VfsError::NavigationTooManyLevelsUp(path)) = err.downcast_ref::<VfsError>() {
            println!("refused to climb {path}");
        }
    }

    // directories need the recursive flag
    fs.cd("/")?;
    if let Err(err) = fs.rm("docs", false) {
        println!("{err}");
    }
    fs.rm("docs", true)?;
    println!("{}: {:?}", fs.pwd(), fs.ls().collect::<Vec<_>>());

    Ok(())
}
