// src/browse.rs
// =============================================================================
// The interactive prompt.
//
// Reads one command per line, turns it into an Intent and hands it to the
// session. The session does all the work; this loop only parses, prints
// usage problems and knows when to stop (quit or end of input).
// =============================================================================

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::github::Gateway;
use crate::render::Presenter;
use crate::session::{Command, SessionController, SessionState, HELP};

pub async fn run<G, P, R>(session: &mut SessionController<G, P>, input: R) -> Result<()>
where
    G: Gateway,
    P: Presenter,
    R: AsyncBufRead + Unpin,
{
    println!("{HELP}");
    let mut lines = input.lines();

    loop {
        prompt(&prompt_label(session));
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            debug!("end of input");
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Empty) => {}
            Ok(Command::Intent(intent)) => {
                session
                    .dispatch(intent)
                    .await
                    .context("Failed to write output")?;
            }
            Err(problem) => println!("{problem} (type 'help' for commands)"),
        }
    }

    Ok(())
}

// "gh> " before any lookup, "gh octocat 2/3 (10 repos)> " once a page is up
fn prompt_label<G, P>(session: &SessionController<G, P>) -> String
where
    G: Gateway,
    P: Presenter,
{
    let context = session.context();
    match (&context.profile, session.state()) {
        (Some(profile), SessionState::Ready) => format!(
            "gh {} {}/{} ({} repos)> ",
            profile.login,
            context.pagination.current_page(),
            context.pagination.total_pages(),
            context.repositories.len()
        ),
        (Some(profile), _) => format!("gh {}> ", profile.login),
        (None, _) => "gh> ".to_string(),
    }
}

fn prompt(label: &str) {
    use std::io::Write;

    print!("\n{label}");
    // A prompt that fails to flush only looks odd; input still works
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::FakeGateway;
    use crate::render::recording::RecordingPresenter;

    #[tokio::test]
    async fn test_runs_commands_until_quit() {
        let mut session =
            SessionController::new(FakeGateway::with_user("octocat", 12), RecordingPresenter::default());
        let input: &[u8] = b"octocat\nbogus command here\nnext\nquit\nuser other\n";

        run(&mut session, input).await.unwrap();

        assert_eq!(session.state(), &SessionState::Ready);
        assert_eq!(session.context().pagination.current_page(), 2);
        assert_eq!(session.gateway().profile_calls(), 1);
    }

    #[tokio::test]
    async fn test_prompt_label_follows_session() {
        let mut session =
            SessionController::new(FakeGateway::with_user("octocat", 12), RecordingPresenter::default());
        assert_eq!(prompt_label(&session), "gh> ");

        session.dispatch(crate::session::Intent::Submit("octocat".into())).await.unwrap();
        assert_eq!(prompt_label(&session), "gh octocat 1/2 (10 repos)> ");
    }

    #[tokio::test]
    async fn test_stops_at_end_of_input() {
        let mut session =
            SessionController::new(FakeGateway::with_user("octocat", 12), RecordingPresenter::default());
        let input: &[u8] = b"size 20\n";

        run(&mut session, input).await.unwrap();

        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.context().pagination.page_size(), 20);
    }
}
