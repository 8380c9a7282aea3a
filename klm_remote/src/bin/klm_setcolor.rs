use anyhow::bail;
use klm_remote::{Color, Connection, Mode, Opt};
use structopt::StructOpt;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt: Opt = Opt::from_args();
    let mut connection = Connection::with_config(opt.connection_config());

    // Blue, brightness 10, steady
    connection
        .set_color(Color::new(0, 0, 255)?)
        .set_brightness(0xA)?
        .set_mode(Mode::Steady);

    let status = connection.commit()?;
    if !status.is_ok() {
        bail!("klmd refused the new color: {:?}", status);
    }

    Ok(())
}
