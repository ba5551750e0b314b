use clap::{crate_authors, crate_description, crate_version, Arg, ArgMatches, Command};
use dialoguer::Password;
use log::info;

use std::path::Path;
use stegox_core::commands::{hide, reveal};
use stegox_core::keys;
use stegox_core::*;

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("stegoX CLI")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg_required_else_help(true)
        .subcommand(
            Command::new("hide")
                .about("Hides a message in an image and prints the lookup key")
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .value_name("password")
                        .required(false)
                        .help("Password used to encrypt the message, prompted for when absent"),
                )
                .arg(
                    Arg::new("media")
                        .short('i')
                        .long("in")
                        .value_name("image file")
                        .required(true)
                        .help("Carrier image such as a PNG, used readonly"),
                )
                .arg(
                    Arg::new("write_to_file")
                        .short('o')
                        .long("out")
                        .value_name("output image file")
                        .required(true)
                        .help("Encoded artifact will be stored as this PNG file"),
                )
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .value_name("text message")
                        .required(true)
                        .help("The text message that will be hidden"),
                ),
        )
        .subcommand(
            Command::new("reveal")
                .about("Reveals the message hidden in an image")
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .value_name("password")
                        .required(false)
                        .help("Password the message was encrypted with, prompted for when absent"),
                )
                .arg(
                    Arg::new("input_image")
                        .short('i')
                        .long("in")
                        .value_name("image source file")
                        .required(true)
                        .help("Artifact image that contains the hidden message"),
                ),
        )
        .subcommand(
            Command::new("keys")
                .about("Derives the lookup key and password digest without touching an image")
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .value_name("password")
                        .required(false)
                        .help("Password to digest, prompted for when absent"),
                )
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .value_name("text message")
                        .required(true)
                        .help("The message the lookup key is derived from"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("hide", m)) => {
            let password = password_of(m, "Password to encrypt the message");
            let receipt = hide(
                Path::new(m.get_one::<String>("media").unwrap()),
                Path::new(m.get_one::<String>("write_to_file").unwrap()),
                m.get_one::<String>("message").unwrap(),
                &password,
            )?;

            info!("artifact written");
            println!("Lookup key:      {}", receipt.lookup_key);
            println!("Password digest: {}", receipt.password_digest);
        }
        Some(("reveal", m)) => {
            let password = password_of(m, "Password the message was encrypted with");
            let message = reveal(
                Path::new(m.get_one::<String>("input_image").unwrap()),
                &password,
            )?;

            println!("{message}");
        }
        Some(("keys", m)) => {
            let password = password_of(m, "Password to digest");
            let message = m.get_one::<String>("message").unwrap();

            println!(
                "Lookup key:      {}",
                keys::lookup_key(message, &password, keys::now_millis())
            );
            println!("Password digest: {}", keys::password_digest(&password));
        }
        _ => {}
    }

    Ok(())
}

fn password_of(args: &ArgMatches, prompt: &str) -> String {
    match args.get_one::<String>("password") {
        Some(password) => password.clone(),
        None => Password::new()
            .with_prompt(prompt)
            .interact()
            .unwrap_or_default(),
    }
}
