use klm_remote::{Connection, Opt};
use log::debug;
use std::process;
use structopt::StructOpt;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt: Opt = Opt::from_args();
    debug!("Options: {:?}", opt);

    let mut connection = Connection::with_config(opt.connection_config());
    connection.toggle();

    let status = connection.commit()?;
    if !status.is_ok() {
        eprintln!(
            "Failed to toggle keyboard lightning: klmd returned {:?} instead of Ok",
            status
        );
        process::exit(1);
    }

    Ok(())
}
