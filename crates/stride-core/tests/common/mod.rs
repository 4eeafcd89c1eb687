use jiff::Timestamp;
use stride_core::{PlanAssembler, PlanAssemblerBuilder};

/// 2024-01-01 00:00:00 UTC
pub fn frozen_now() -> Timestamp {
    Timestamp::from_second(1_704_067_200).expect("valid timestamp")
}

/// Helper function to create a local-only assembler with a frozen clock
pub fn create_test_assembler() -> PlanAssembler {
    PlanAssemblerBuilder::new()
        .with_user_id("user123")
        .with_fixed_time(frozen_now())
        .build()
        .expect("Failed to create assembler")
}
