mod common;

use common::{MockTransport, Recorder, api, body_of, pauta, resultado_json};
use futures::executor::block_on;
use serde_json::json;
use votacao::api::{HttpMethod, RawResponse};
use votacao::card::{CardActions, Tally, delete_prompt};
use votacao::data::VotoValor;
use votacao::notification::{Notification, NotificationKind};
use votacao::sequence::FetchSequence;

fn with_actions<R>(
    transport: MockTransport,
    run: impl FnOnce(&CardActions<'_, MockTransport>, &Recorder) -> R,
) -> (R, Vec<(HttpMethod, String)>, Recorder) {
    let api = api(transport);
    let recorder = Recorder::default();
    let notify = |n: Notification| recorder.notify(n);
    let refresh = || recorder.refresh();
    let result = {
        let actions = CardActions::new(&api, &notify, &refresh);
        run(&actions, &recorder)
    };
    let calls = api.client().calls();
    (result, calls, recorder)
}

#[test]
fn vote_records_then_refreshes_tally() {
    let item = pauta(1, Some(true));
    let transport = MockTransport::new()
        .respond(RawResponse::new(201, ""))
        .respond_json(200, resultado_json(1, 1, 0));

    let api = api(transport);
    let recorder = Recorder::default();
    let notify = |n: Notification| recorder.notify(n);
    let refresh = || recorder.refresh();
    let actions = CardActions::new(&api, &notify, &refresh);

    let seq = FetchSequence::new();
    let tally = block_on(actions.vote(&item, "12345678901", VotoValor::Sim, &seq));

    let requests = api.client().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "/pautas/1/votos");
    assert_eq!(
        body_of(&requests[0]),
        json!({ "associadoId": "12345678901", "voto": "SIM" })
    );
    assert_eq!(requests[1].path, "/pautas/1/resultado");

    assert_eq!(
        recorder.last(),
        Some(Notification::success("Voto registrado com sucesso."))
    );
    assert_eq!(recorder.refreshes.get(), 1);
    let Some(Tally::Loaded(resultado)) = tally else {
        panic!("expected a loaded tally");
    };
    assert_eq!(resultado.votos_sim, 1);
}

#[test]
fn vote_without_id_is_rejected_locally() {
    let item = pauta(1, Some(true));
    let (tally, calls, recorder) = with_actions(MockTransport::new(), |actions, _| {
        block_on(actions.vote(&item, "", VotoValor::Nao, &FetchSequence::new()))
    });

    assert!(tally.is_none());
    assert!(calls.is_empty());
    assert_eq!(
        recorder.last(),
        Some(Notification::error("Informe o ID do associado antes de votar."))
    );
    assert_eq!(recorder.refreshes.get(), 0);
}

#[test]
fn vote_with_short_id_is_rejected_locally() {
    let item = pauta(1, Some(true));
    let (tally, calls, recorder) = with_actions(MockTransport::new(), |actions, _| {
        block_on(actions.vote(&item, "1234567890", VotoValor::Sim, &FetchSequence::new()))
    });

    assert!(tally.is_none());
    assert!(calls.is_empty());
    assert_eq!(
        recorder.last(),
        Some(Notification::error("O ID deve ter 11 dígitos (formato CPF)."))
    );
}

#[test]
fn vote_rejected_by_backend_notifies_its_message() {
    let item = pauta(1, Some(true));
    let transport = MockTransport::new().respond_json(400, json!({ "message": "Sessão encerrada" }));
    let (tally, calls, recorder) = with_actions(transport, |actions, _| {
        block_on(actions.vote(&item, "12345678901", VotoValor::Sim, &FetchSequence::new()))
    });

    assert!(tally.is_none());
    assert_eq!(calls.len(), 1);
    assert_eq!(recorder.last(), Some(Notification::error("Sessão encerrada")));
    assert_eq!(recorder.refreshes.get(), 0);
}

#[test]
fn rejected_vote_leaves_pending_tally_fetch_current() {
    let item = pauta(1, Some(true));
    let seq = FetchSequence::new();
    // The card's automatic tally fetch is still waiting for its response.
    let pending = seq.next();

    let transport = MockTransport::new().respond_json(409, json!({ "message": "Associado já votou" }));
    let (tallies, _, _) = with_actions(transport, |actions, _| {
        let missing = block_on(actions.vote(&item, "", VotoValor::Sim, &seq));
        let short = block_on(actions.vote(&item, "123", VotoValor::Nao, &seq));
        let refused = block_on(actions.vote(&item, "12345678901", VotoValor::Sim, &seq));
        [missing, short, refused]
    });

    assert_eq!(tallies, [None, None, None]);
    assert!(seq.is_latest(pending));
    assert_eq!(seq.settle(pending, Tally::NoSession), Some(Tally::NoSession));
}

#[test]
fn recorded_vote_supersedes_pending_tally_fetch() {
    let item = pauta(1, Some(true));
    let seq = FetchSequence::new();
    let pending = seq.next();

    let transport = MockTransport::new()
        .respond(RawResponse::new(204, ""))
        .respond_json(200, resultado_json(1, 0, 1));
    let (tally, _, _) = with_actions(transport, |actions, _| {
        block_on(actions.vote(&item, "12345678901", VotoValor::Nao, &seq))
    });

    assert!(matches!(tally, Some(Tally::Loaded(ref r)) if r.votos_nao == 1));
    assert!(!seq.is_latest(pending));
}

#[test]
fn refresh_tally_without_session_settles_to_no_session() {
    let item = pauta(3, None);
    let seq = FetchSequence::new();
    let (tally, calls, _) = with_actions(MockTransport::new(), |actions, _| {
        block_on(actions.refresh_tally(&item, &seq))
    });

    assert_eq!(tally, Some(Tally::NoSession));
    assert!(calls.is_empty());
}

#[test]
fn open_sessao_rejects_invalid_duration() {
    let item = pauta(2, None);
    for bad in ["0", "-1", "", "abc"] {
        let (opened, calls, recorder) = with_actions(MockTransport::new(), |actions, _| {
            block_on(actions.open_sessao(&item, bad))
        });
        assert!(!opened);
        assert!(calls.is_empty(), "{bad:?} must not reach the network");
        assert_eq!(
            recorder.last(),
            Some(Notification::error("Informe uma duração válida em minutos."))
        );
    }
}

#[test]
fn open_sessao_success_notifies_and_refreshes() {
    let item = pauta(2, None);
    let transport = MockTransport::new().respond(RawResponse::new(204, ""));
    let api = api(transport);
    let recorder = Recorder::default();
    let notify = |n: Notification| recorder.notify(n);
    let refresh = || recorder.refresh();
    let actions = CardActions::new(&api, &notify, &refresh);

    assert!(block_on(actions.open_sessao(&item, "3")));

    let requests = api.client().requests();
    assert_eq!(requests[0].path, "/pautas/2/sessoes");
    assert_eq!(body_of(&requests[0]), json!({ "duracaoMinutos": 3 }));
    assert_eq!(
        recorder.last(),
        Some(Notification::success("Sessão aberta com sucesso."))
    );
    assert_eq!(recorder.refreshes.get(), 1);
}

#[test]
fn open_sessao_failure_uses_backend_message() {
    let item = pauta(2, None);
    let transport = MockTransport::new().respond_json(409, json!({ "message": "Sessão já aberta" }));
    let (opened, _, recorder) = with_actions(transport, |actions, _| {
        block_on(actions.open_sessao(&item, "1"))
    });

    assert!(!opened);
    assert_eq!(recorder.last(), Some(Notification::error("Sessão já aberta")));
    assert_eq!(recorder.refreshes.get(), 0);
}

#[test]
fn tally_skipped_without_session() {
    let item = pauta(3, None);
    let (tally, calls, _) = with_actions(MockTransport::new(), |actions, _| {
        block_on(actions.tally(&item))
    });

    assert_eq!(tally, Tally::NoSession);
    assert!(calls.is_empty());
}

#[test]
fn tally_failure_clears_display_and_notifies() {
    let item = pauta(3, Some(false));
    let transport = MockTransport::new().respond(
        RawResponse::new(500, "<html>").with_status_text("Internal Server Error"),
    );
    let (tally, _, recorder) = with_actions(transport, |actions, _| block_on(actions.tally(&item)));

    assert_eq!(tally, Tally::Failed);
    assert_eq!(tally.into_display(), None);
    let last = recorder.last().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(last.message, "Internal Server Error");
}

#[test]
fn tally_parse_failure_uses_generic_message() {
    let item = pauta(3, Some(true));
    let transport = MockTransport::new().respond(RawResponse::new(200, "not json"));
    let (_, _, recorder) = with_actions(transport, |actions, _| block_on(actions.tally(&item)));

    assert_eq!(
        recorder.last(),
        Some(Notification::error("Erro ao carregar resultado."))
    );
}

#[test]
fn delete_declined_does_nothing() {
    let item = pauta(4, None);
    let mut prompt = String::new();
    let (deleted, calls, recorder) = with_actions(MockTransport::new(), |actions, recorder| {
        let on_deleted = || recorder.deleted();
        block_on(actions.delete(
            &item,
            |message| {
                prompt = message.to_string();
                false
            },
            Some(&on_deleted as &dyn Fn()),
        ))
    });

    assert!(!deleted);
    assert_eq!(prompt, "Excluir \"Pauta 4\" e todos os votos?");
    assert!(calls.is_empty());
    assert!(recorder.notifications.borrow().is_empty());
    assert_eq!(recorder.deletions.get(), 0);
    assert_eq!(recorder.refreshes.get(), 0);
}

#[test]
fn delete_with_callback_skips_refresh() {
    let item = pauta(4, None);
    let transport = MockTransport::new().respond(RawResponse::new(204, ""));
    let (deleted, calls, recorder) = with_actions(transport, |actions, recorder| {
        let on_deleted = || recorder.deleted();
        block_on(actions.delete(&item, |_| true, Some(&on_deleted as &dyn Fn())))
    });

    assert!(deleted);
    assert_eq!(calls, vec![(HttpMethod::Delete, "/pautas/4".to_string())]);
    assert_eq!(recorder.last(), Some(Notification::success("Pauta excluída.")));
    assert_eq!(recorder.deletions.get(), 1);
    assert_eq!(recorder.refreshes.get(), 0);
}

#[test]
fn delete_without_callback_refreshes() {
    let item = pauta(4, None);
    let transport = MockTransport::new().respond(RawResponse::new(204, ""));
    let (deleted, _, recorder) = with_actions(transport, |actions, _| {
        block_on(actions.delete(&item, |_| true, None))
    });

    assert!(deleted);
    assert_eq!(recorder.refreshes.get(), 1);
    assert_eq!(recorder.deletions.get(), 0);
}

#[test]
fn delete_failure_runs_no_follow_up() {
    let item = pauta(4, None);
    let transport = MockTransport::new().respond(RawResponse::new(404, ""));
    let (deleted, _, recorder) = with_actions(transport, |actions, recorder| {
        let on_deleted = || recorder.deleted();
        block_on(actions.delete(&item, |_| true, Some(&on_deleted as &dyn Fn())))
    });

    assert!(!deleted);
    assert_eq!(recorder.last(), Some(Notification::error("Request failed")));
    assert_eq!(recorder.deletions.get(), 0);
    assert_eq!(recorder.refreshes.get(), 0);
}

#[test]
fn prompt_names_the_item() {
    assert_eq!(
        delete_prompt(&pauta(8, None)),
        "Excluir \"Pauta 8\" e todos os votos?"
    );
}
