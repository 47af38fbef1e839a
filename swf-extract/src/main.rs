mod cli;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};

fn init_logger() {
    // RUST_LOG overrides the default level
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run(cli::Cli::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let input = fs::read(&cli.input)
        .with_context(|| format!("failed to open file: {}", cli.input.display()))?;

    if cli.list {
        return list(&input, &cli.input);
    }

    // clap guarantees both are present without --list
    let (Some(id), Some(output)) = (cli.id, cli.output) else {
        anyhow::bail!("--id and --output are required");
    };

    let data = libswf::find(&input, id).with_context(|| format!("failed to find id: {}", id))?;

    // only touch the output once the payload is in hand
    fs::write(&output, &data)
        .with_context(|| format!("failed to write file: {}", output.display()))?;

    info!("wrote {} bytes of id {} to {}", data.len(), id, output.display());

    Ok(())
}

fn list(input: &[u8], path: &Path) -> Result<()> {
    let assets = libswf::binary_assets(input)
        .with_context(|| format!("failed to list binary data in {}", path.display()))?;

    for asset in &assets {
        println!("{}\t{}", asset.id, asset.data_len);
    }

    info!("{} binary data tags in {}", assets.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "swf-extract-{}-{}-{}",
            prefix,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    // header + one binary data tag: id 7, payload "abc"
    fn sample_swf() -> Vec<u8> {
        let mut swf = vec![0x46, 0x57, 0x53, 0x0A, 19, 0, 0, 0];
        swf.extend_from_slice(&[0xC9, 0x15, 0x07, 0x00, 0, 0, 0, 0, b'a', b'b', b'c']);
        swf
    }

    fn extract(input: PathBuf, id: u16, output: PathBuf) -> cli::Cli {
        cli::Cli {
            input,
            id: Some(id),
            output: Some(output),
            list: false,
        }
    }

    #[test]
    fn writes_payload_on_success() {
        let dir = scratch_dir("ok");
        let input = dir.join("in.swf");
        let output = dir.join("out.bin");
        fs::write(&input, sample_swf()).unwrap();

        run(extract(input, 7, output.clone())).unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"abc");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn no_output_when_id_is_missing() {
        let dir = scratch_dir("missing");
        let input = dir.join("in.swf");
        let output = dir.join("out.bin");
        fs::write(&input, sample_swf()).unwrap();

        let err = run(extract(input, 8, output.clone())).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "failed to find id: 8: binary data id 8 not found"
        );
        assert!(!output.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn no_output_when_input_is_truncated() {
        let dir = scratch_dir("truncated");
        let input = dir.join("in.swf");
        let output = dir.join("out.bin");
        let swf = sample_swf();
        fs::write(&input, &swf[..swf.len() - 1]).unwrap();

        let err = run(extract(input, 7, output.clone())).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "failed to find id: 7: failed to parse tag: failed to read tag content: \
             overflow at offset 0xa (need 9 bytes, have 8)"
        );
        assert!(!output.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
