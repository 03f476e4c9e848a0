// rlsinfo-cli/src/commands/create.rs
//
// The `create` command: mediainfo report, screenshots, upload, and the
// assembled release info on stdout or in a file.

use super::screenshots::{build_config, capture, check_tools};
use super::{load_title, write_output};
use crate::cli::CreateArgs;
use crate::error::CliResult;
use crate::output;

use rlsinfo_core::{
    HostCredentials, HttpUploader, ImageHost, ImageUploader, gallery_name, mediainfo_report,
};

/// Picks the credentials `host` uses out of the command-line settings.
pub fn credentials_for(host: ImageHost, args: &CreateArgs) -> HostCredentials {
    match host {
        ImageHost::Ptpimg => HostCredentials {
            api_key: args.ptpimg_api_key.clone(),
            ..Default::default()
        },
        ImageHost::Imgbb => HostCredentials {
            api_key: args.imgbb_api_key.clone(),
            ..Default::default()
        },
        ImageHost::Hdbimg => HostCredentials {
            api_key: None,
            username: args.hdbimg_username.clone(),
            passkey: args.hdbimg_passkey.clone(),
        },
    }
}

/// The report followed by one URL per line.
pub fn assemble_release_info(report: &str, urls: &[String]) -> String {
    let mut info = report.to_string();
    for url in urls {
        info.push_str(url);
        info.push('\n');
    }
    info
}

pub fn run_create(args: CreateArgs) -> CliResult<()> {
    // Host and credentials are checked before any capture work starts
    let host: ImageHost = args.host.parse()?;
    let uploader = HttpUploader::new(
        host,
        credentials_for(host, &args),
        gallery_name(&args.screenshots.input_path),
    )?;

    let config = build_config(&args.screenshots);
    config.validate()?;
    let title = load_title(&args.screenshots.input_path, &config.mediainfo_path)?;
    check_tools(&config)?;

    output::print_heading("Release info");
    output::print_info("Release", title.root().display());
    output::print_info("Type", title.release_type());
    output::print_info("Image host", host);

    let report = mediainfo_report(&config, &title)?;
    let screenshots = capture(&config, &title)?;

    let urls = uploader.upload(&screenshots)?;
    output::print_success(&format!("Uploaded {} screenshot(s) to {}", urls.len(), host));

    write_output(&assemble_release_info(&report, &urls), args.output.as_deref())?;
    if let Some(path) = &args.output {
        output::print_success(&format!("Release info written to {}", path.display()));
    }
    Ok(())
}
