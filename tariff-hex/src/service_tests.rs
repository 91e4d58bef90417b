//! Use-case unit tests against in-memory port doubles.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

    use tariff_types::{
        Account, AccountId, AccountRepository, AccountSearcher, AdjustmentFlowProcessor,
        AppError, Fee, IntegrationError, TariffAdjustmentRepository, TariffAdjustmentRequest,
        TransactionId,
    };

    use crate::service::{AccountService, ReportService, SearchService};

    const PUBLIC_URL: &str = "http://bff.local";
    const CALLBACK_URL: &str = "http://bff.local/v1/accounts/notifications";

    /// How a double answers.
    #[derive(Clone, Copy)]
    pub enum Behaviour {
        Succeed,
        Fail,
        Hang,
    }

    impl Behaviour {
        async fn resolve(self) -> Result<(), IntegrationError> {
            match self {
                Behaviour::Succeed => Ok(()),
                Behaviour::Fail => Err(IntegrationError::Http {
                    status: 500,
                    body: "downstream down".into(),
                }),
                Behaviour::Hang => std::future::pending().await,
            }
        }
    }

    /// Side effects observed by the doubles, in arrival order.
    #[derive(Debug)]
    pub enum Event {
        Created(TariffAdjustmentRequest, String),
        FlowStarted(TariffAdjustmentRequest, String),
    }

    pub fn account(id: &str, fee: Fee, account_type: &str) -> Account {
        Account::new(AccountId::parse(id).unwrap(), format!("Account {id}"), fee, account_type)
    }

    pub fn fee(value: rust_decimal::Decimal) -> Fee {
        Fee::new(value).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Doubles
    // ─────────────────────────────────────────────────────────────────────────

    #[derive(Default)]
    pub struct MockAccounts {
        accounts: Mutex<HashMap<AccountId, Account>>,
        pub get_calls: Mutex<usize>,
        pub updates: Mutex<Vec<(AccountId, Fee)>>,
        pub fail_updates: bool,
    }

    impl MockAccounts {
        pub fn with(accounts: Vec<Account>) -> Self {
            Self {
                accounts: Mutex::new(accounts.into_iter().map(|a| (a.id.clone(), a)).collect()),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccounts {
        async fn get(&self, id: &AccountId) -> Result<Account, IntegrationError> {
            *self.get_calls.lock().unwrap() += 1;
            self.accounts
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| IntegrationError::Http {
                    status: 404,
                    body: format!("account {id} not found"),
                })
        }

        async fn update_fee(&self, id: &AccountId, new_fee: Fee) -> Result<(), IntegrationError> {
            if self.fail_updates {
                return Err(IntegrationError::Transport("connection reset".into()));
            }
            self.updates.lock().unwrap().push((id.clone(), new_fee));
            Ok(())
        }
    }

    pub struct MockAdjustments {
        behaviour: Behaviour,
        history: Vec<TariffAdjustmentRequest>,
        events: UnboundedSender<Event>,
    }

    #[async_trait]
    impl TariffAdjustmentRepository for MockAdjustments {
        async fn create(
            &self,
            request: &TariffAdjustmentRequest,
            callback_url: &str,
        ) -> Result<(), IntegrationError> {
            let _ = self
                .events
                .send(Event::Created(request.clone(), callback_url.to_string()));
            self.behaviour.resolve().await
        }

        async fn get_last_by_account(
            &self,
            id: &AccountId,
        ) -> Result<TariffAdjustmentRequest, IntegrationError> {
            if let Behaviour::Fail = self.behaviour {
                return Err(IntegrationError::Http {
                    status: 404,
                    body: "no adjustments".into(),
                });
            }
            self.history
                .iter()
                .find(|a| &a.account_id == id)
                .cloned()
                .ok_or_else(|| IntegrationError::Http {
                    status: 404,
                    body: "no adjustments".into(),
                })
        }

        async fn all_by_account(
            &self,
            id: &AccountId,
        ) -> Result<Vec<TariffAdjustmentRequest>, IntegrationError> {
            self.behaviour.resolve().await?;
            Ok(self
                .history
                .iter()
                .filter(|a| &a.account_id == id)
                .cloned()
                .collect())
        }
    }

    pub struct MockFlow {
        behaviour: Behaviour,
        events: UnboundedSender<Event>,
    }

    #[async_trait]
    impl AdjustmentFlowProcessor for MockFlow {
        async fn begin_flow(
            &self,
            request: &TariffAdjustmentRequest,
            callback_url: &str,
        ) -> Result<(), IntegrationError> {
            let _ = self
                .events
                .send(Event::FlowStarted(request.clone(), callback_url.to_string()));
            self.behaviour.resolve().await
        }
    }

    #[derive(Default)]
    pub struct MockSearcher {
        accounts: Vec<Account>,
        fail: bool,
        pub terms: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AccountSearcher for MockSearcher {
        async fn search_by_term(&self, term: &str) -> Result<Vec<Account>, IntegrationError> {
            self.terms.lock().unwrap().push(term.to_string());
            if self.fail {
                return Err(IntegrationError::Transport("timed out".into()));
            }
            Ok(self.accounts.clone())
        }
    }

    struct Harness {
        service: AccountService,
        accounts: Arc<MockAccounts>,
        events: UnboundedReceiver<Event>,
    }

    fn harness(
        accounts: MockAccounts,
        history: Vec<TariffAdjustmentRequest>,
        store: Behaviour,
        flow: Behaviour,
    ) -> Harness {
        let (tx, rx) = unbounded_channel();
        let accounts = Arc::new(accounts);
        let adjustments = Arc::new(MockAdjustments {
            behaviour: store,
            history,
            events: tx.clone(),
        });
        let flow = Arc::new(MockFlow {
            behaviour: flow,
            events: tx,
        });

        Harness {
            service: AccountService::new(accounts.clone(), adjustments, flow, PUBLIC_URL),
            accounts,
            events: rx,
        }
    }

    async fn next_event(rx: &mut UnboundedReceiver<Event>) -> Event {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("background call never happened")
            .expect("event channel closed")
    }

    fn adjustment(tx: &str, account_id: &str, new_fee: Fee) -> TariffAdjustmentRequest {
        TariffAdjustmentRequest::from_parts(
            TransactionId::from_string(tx),
            AccountId::parse(account_id).unwrap(),
            new_fee,
            None,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // GetAccount
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_account_success() {
        let h = harness(
            MockAccounts::with(vec![account("acc-1", fee(dec!(10)), "checking")]),
            vec![],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let found = h.service.get_account("acc-1").await.unwrap();

        assert_eq!(found.id.as_str(), "acc-1");
        assert_eq!(found.monthly_fee, fee(dec!(10)));
    }

    #[tokio::test]
    async fn test_get_account_empty_id_never_calls_downstream() {
        let h = harness(
            MockAccounts::default(),
            vec![],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let result = h.service.get_account("").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(*h.accounts.get_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_account_propagates_downstream_error() {
        let h = harness(
            MockAccounts::default(),
            vec![],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let result = h.service.get_account("ghost").await;

        assert!(matches!(
            result,
            Err(AppError::Upstream(IntegrationError::Http { status: 404, .. }))
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // SendTariffAdjustmentRequest
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_send_adjustment_runs_both_background_calls() {
        let mut h = harness(
            MockAccounts::default(),
            vec![],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let transaction_id = h
            .service
            .send_tariff_adjustment_request("acc-1", fee(dec!(4.99)))
            .unwrap();

        let mut created = None;
        let mut started = None;
        for _ in 0..2 {
            match next_event(&mut h.events).await {
                Event::Created(req, url) => created = Some((req, url)),
                Event::FlowStarted(req, url) => started = Some((req, url)),
            }
        }

        let (created, created_url) = created.expect("store was not called");
        let (started, started_url) = started.expect("flow was not started");

        assert_eq!(created.transaction_id, transaction_id);
        assert_eq!(started.transaction_id, transaction_id);
        assert_eq!(created.account_id.as_str(), "acc-1");
        assert_eq!(started.new_fee, fee(dec!(4.99)));
        assert_eq!(created_url, CALLBACK_URL);
        assert_eq!(started_url, CALLBACK_URL);
    }

    #[tokio::test]
    async fn test_send_adjustment_succeeds_when_both_background_calls_fail() {
        let mut h = harness(
            MockAccounts::default(),
            vec![],
            Behaviour::Fail,
            Behaviour::Fail,
        );

        let result = h
            .service
            .send_tariff_adjustment_request("acc-1", fee(dec!(1)));

        assert!(result.is_ok());
        // both were still attempted
        next_event(&mut h.events).await;
        next_event(&mut h.events).await;
    }

    #[tokio::test]
    async fn test_send_adjustment_does_not_wait_for_downstream() {
        let mut h = harness(
            MockAccounts::default(),
            vec![],
            Behaviour::Hang,
            Behaviour::Hang,
        );

        let result = h
            .service
            .send_tariff_adjustment_request("acc-1", fee(dec!(1)));

        assert!(result.is_ok());
        next_event(&mut h.events).await;
        next_event(&mut h.events).await;
    }

    #[tokio::test]
    async fn test_each_submission_gets_its_own_transaction_id() {
        let h = harness(
            MockAccounts::default(),
            vec![],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let first = h
            .service
            .send_tariff_adjustment_request("acc-1", fee(dec!(1)))
            .unwrap();
        let second = h
            .service
            .send_tariff_adjustment_request("acc-1", fee(dec!(1)))
            .unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_send_adjustment_blank_account_is_rejected() {
        let mut h = harness(
            MockAccounts::default(),
            vec![],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let result = h
            .service
            .send_tariff_adjustment_request("  ", fee(dec!(1)));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        tokio::task::yield_now().await;
        assert!(h.events.try_recv().is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // GetTariffAdjustments / UpdateFee
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_tariff_adjustments_keeps_store_order() {
        let h = harness(
            MockAccounts::default(),
            vec![
                adjustment("tx-3", "acc-1", fee(dec!(3))),
                adjustment("tx-x", "acc-2", fee(dec!(9))),
                adjustment("tx-1", "acc-1", fee(dec!(1))),
            ],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let list = h.service.get_tariff_adjustments("acc-1").await.unwrap();

        let ids: Vec<&str> = list.iter().map(|a| a.transaction_id.as_str()).collect();
        assert_eq!(ids, vec!["tx-3", "tx-1"]);
    }

    #[tokio::test]
    async fn test_update_fee_applies_last_adjustment() {
        let h = harness(
            MockAccounts::default(),
            vec![
                adjustment("tx-2", "acc-1", fee(dec!(22.5))),
                adjustment("tx-1", "acc-1", fee(dec!(11))),
            ],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let applied = h.service.update_fee("acc-1").await.unwrap();

        assert_eq!(applied.transaction_id.as_str(), "tx-2");
        let updates = h.accounts.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0.as_str(), "acc-1");
        assert_eq!(updates[0].1, fee(dec!(22.5)));
    }

    #[tokio::test]
    async fn test_update_fee_stops_when_last_adjustment_fails() {
        let h = harness(
            MockAccounts::default(),
            vec![adjustment("tx-1", "acc-1", fee(dec!(11)))],
            Behaviour::Fail,
            Behaviour::Succeed,
        );

        let result = h.service.update_fee("acc-1").await;

        assert!(matches!(
            result,
            Err(AppError::Upstream(IntegrationError::Http { status: 404, .. }))
        ));
        assert!(h.accounts.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_fee_propagates_account_update_failure() {
        let h = harness(
            MockAccounts {
                fail_updates: true,
                ..Default::default()
            },
            vec![adjustment("tx-1", "acc-1", fee(dec!(11)))],
            Behaviour::Succeed,
            Behaviour::Succeed,
        );

        let result = h.service.update_fee("acc-1").await;

        assert!(matches!(
            result,
            Err(AppError::Upstream(IntegrationError::Transport(_)))
        ));
    }

    #[test]
    fn test_callback_url_trims_trailing_slash() {
        let (tx, _rx) = unbounded_channel();
        let service = AccountService::new(
            Arc::new(MockAccounts::default()),
            Arc::new(MockAdjustments {
                behaviour: Behaviour::Succeed,
                history: vec![],
                events: tx.clone(),
            }),
            Arc::new(MockFlow {
                behaviour: Behaviour::Succeed,
                events: tx,
            }),
            "https://bff.example.com/",
        );

        assert_eq!(
            service.callback_url(),
            "https://bff.example.com/v1/accounts/notifications"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search / Report
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_search_passes_term_through() {
        let searcher = Arc::new(MockSearcher {
            accounts: vec![account("a", fee(dec!(1)), "loan")],
            ..Default::default()
        });
        let service = SearchService::new(searcher.clone());

        let found = service.search_accounts_by_term("loan").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(*searcher.terms.lock().unwrap(), vec!["loan".to_string()]);
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let service = SearchService::new(Arc::new(MockSearcher {
            fail: true,
            ..Default::default()
        }));

        let result = service.search_accounts_by_term("x").await;

        assert!(matches!(
            result,
            Err(AppError::Upstream(IntegrationError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn test_report_aggregates_all_accounts() {
        let searcher = Arc::new(MockSearcher {
            accounts: vec![
                account("1", fee(dec!(10)), "a"),
                account("2", fee(dec!(50)), "b"),
                account("3", fee(dec!(30)), "a"),
            ],
            ..Default::default()
        });
        let reports = ReportService::new(Arc::new(SearchService::new(searcher.clone())));

        let report = reports.get_report().await.unwrap();

        assert_eq!(report.total_accounts, 3);
        assert_eq!(report.totals_by_type["a"], 2);
        assert_eq!(report.totals_by_type["b"], 1);
        let fees: Vec<Fee> = report.top_100_by_fee.iter().map(|a| a.monthly_fee).collect();
        assert_eq!(fees, vec![fee(dec!(50)), fee(dec!(30)), fee(dec!(10))]);
        // the report always asks for the whole population
        assert_eq!(*searcher.terms.lock().unwrap(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_report_fails_when_search_fails() {
        let reports = ReportService::new(Arc::new(SearchService::new(Arc::new(MockSearcher {
            fail: true,
            ..Default::default()
        }))));

        assert!(reports.get_report().await.is_err());
    }
}
