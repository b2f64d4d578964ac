use heavens_digest::prelude::*;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let config = DigestConfig::from_constants()?;
    config.validate()?;

    // Step 1: fetch and extract every report, one page at a time
    let generate = GenerateDigestUseCase::new(
        HeavensAboveClient::new(&config.base_url)?,
        StderrProgressReporter::new(),
    );
    let response = generate.execute(&config.digest_request())?;

    // Step 2: format, assemble and hand to sendmail
    let send = SendDigestUseCase::new(
        PlainTextFormatter::new(),
        SendmailTransport::new(&config.sendmail_program),
        StderrProgressReporter::new(),
    );
    send.execute(&response.reports, &config.envelope())?;

    Ok(())
}
