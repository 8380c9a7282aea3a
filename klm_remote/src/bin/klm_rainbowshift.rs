use anyhow::bail;
use klm_remote::{Color, Connection, Mode, Opt};
use log::info;
use structopt::StructOpt;

const RAINBOW: [Color; 7] = [
    Color::from_rgb(0xFF, 0x00, 0x00),
    Color::from_rgb(0xFF, 0xA5, 0x00),
    Color::from_rgb(0xFF, 0xFF, 0x00),
    Color::from_rgb(0x00, 0x80, 0x00),
    Color::from_rgb(0x00, 0x00, 0xFF),
    Color::from_rgb(0x4B, 0x00, 0x82),
    Color::from_rgb(0xEE, 0x80, 0xEE),
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt: Opt = Opt::from_args();
    let mut connection = Connection::with_config(opt.connection_config());

    // The first color replaces whatever klmd had, the others are appended
    connection.set_color(RAINBOW[0]);
    for color in &RAINBOW[1..] {
        connection.add_color(*color);
    }
    connection.set_mode(Mode::ColorShift);

    info!("Sending {} colors", RAINBOW.len());
    let status = connection.commit()?;
    if !status.is_ok() {
        bail!("klmd refused the rainbow: {:?}", status);
    }

    Ok(())
}
