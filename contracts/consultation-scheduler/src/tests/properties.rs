use proptest::prelude::*;

use super::utils::TestContext;
use crate::{ConsultationStatus, SchedulerError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn non_increasing_range_is_rejected(start in any::<u64>(), back in 0u64..=10_000) {
        let ctx = TestContext::new();
        let end = start.saturating_sub(back);

        let result = ctx.client.try_add_availability_slot(&ctx.provider, &start, &end);
        prop_assert_eq!(result, Err(Ok(SchedulerError::InvalidRange)));
        prop_assert_eq!(ctx.client.get_slot_count(), 0);
        prop_assert!(ctx.client.get_provider_availability(&ctx.provider, &0).is_none());
    }

    #[test]
    fn slot_is_booked_at_most_once(attempts in 2u32..8) {
        let ctx = TestContext::new();
        let slot_id = ctx.add_slot(0);

        let mut successes = 0u32;
        for _ in 0..attempts {
            let patient = ctx.new_address();
            match ctx.client.try_book_consultation(&patient, &ctx.provider, &slot_id, &ctx.notes("race")) {
                Ok(Ok(_)) => successes += 1,
                other => {
                    prop_assert_eq!(other, Err(Ok(SchedulerError::AlreadyBooked)));
                }
            }
        }

        prop_assert_eq!(successes, 1);
        prop_assert_eq!(ctx.client.get_consultation_count(), 1);
        prop_assert!(ctx.client.get_provider_availability(&ctx.provider, &slot_id).unwrap().is_booked);
    }

    #[test]
    fn only_authorized_callers_change_status(role in 0u8..3, cancel in any::<bool>()) {
        let ctx = TestContext::new();
        let consultation_id = ctx.book_default();
        let caller = match role {
            0 => ctx.provider.clone(),
            1 => ctx.patient.clone(),
            _ => ctx.new_address(),
        };

        let (result, allowed, target) = if cancel {
            (
                ctx.client.try_cancel_consultation(&caller, &consultation_id),
                role <= 1,
                ConsultationStatus::Cancelled,
            )
        } else {
            (
                ctx.client.try_complete_consultation(&caller, &consultation_id),
                role == 0,
                ConsultationStatus::Completed,
            )
        };

        let status = ctx.client.get_consultation(&consultation_id).unwrap().status;
        if allowed {
            prop_assert!(result.is_ok());
            prop_assert_eq!(status, target);
        } else {
            prop_assert_eq!(result, Err(Ok(SchedulerError::Forbidden)));
            prop_assert_eq!(status, ConsultationStatus::Scheduled);
        }
    }

    #[test]
    fn booking_copies_slot_times(start in 0u64..(u64::MAX / 2), length in 1u64..=604_800) {
        let ctx = TestContext::new();
        let slot_id = ctx.client.add_availability_slot(&ctx.provider, &start, &(start + length));

        let consultation_id = ctx.client.book_consultation(&ctx.patient, &ctx.provider, &slot_id, &ctx.notes("p4"));
        let consultation = ctx.client.get_consultation(&consultation_id).unwrap();
        prop_assert_eq!(consultation.timestamp, start);
        prop_assert_eq!(consultation.duration, length);
    }

    #[test]
    fn admin_capability_follows_transfers(transfers in 1usize..5) {
        let ctx = TestContext::new();
        let mut current = ctx.admin.clone();

        for _ in 0..transfers {
            let next = ctx.new_address();
            ctx.client.transfer_admin(&current, &next);

            let result = ctx.client.try_transfer_admin(&current, &current);
            prop_assert_eq!(result, Err(Ok(SchedulerError::Forbidden)));
            prop_assert_eq!(ctx.client.get_admin(), next.clone());
            current = next;
        }
    }
}
