use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{ConsultationScheduler, ConsultationSchedulerClient};

pub const START: u64 = 1_672_531_200; // 2023-01-01T00:00:00Z
pub const HOUR: u64 = 3_600;

pub struct TestContext {
    pub env: Env,
    pub client: ConsultationSchedulerClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub provider: Address,
    pub patient: Address,
}

impl TestContext {
    /// Initialized scheduler with every auth mocked
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        Self::with_env(env)
    }

    /// Initialized scheduler that enforces real signatures from here on
    pub fn without_mocked_auths() -> Self {
        let ctx = Self::new();
        ctx.revoke_mocked_auths();
        ctx
    }

    /// Switch the host back to enforcing `require_auth` with no signatures
    pub fn revoke_mocked_auths(&self) {
        self.env.set_auths(&[]);
    }

    fn with_env(env: Env) -> Self {
        let contract_id = env.register(ConsultationScheduler, ());
        let client = ConsultationSchedulerClient::new(&env, &contract_id);
        let admin = Address::generate(&env);
        client.initialize(&admin);

        let provider = Address::generate(&env);
        let patient = Address::generate(&env);
        Self { env, client, contract_id, admin, provider, patient }
    }

    pub fn new_address(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn notes(&self, text: &str) -> String {
        String::from_str(&self.env, text)
    }

    /// One-hour slot starting `offset_hours` after START, owned by the default provider
    pub fn add_slot(&self, offset_hours: u64) -> u64 {
        let start = START + offset_hours * HOUR;
        self.client
            .add_availability_slot(&self.provider, &start, &(start + HOUR))
    }

    /// Add a slot and book it as the default patient
    pub fn book_default(&self) -> u64 {
        let slot_id = self.add_slot(0);
        self.client
            .book_consultation(&self.patient, &self.provider, &slot_id, &self.notes("checkup"))
    }
}
