use rand::Rng;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// Free-text notes a staff member may leave on a timesheet
#[derive(Debug, Display, EnumIter, EnumCountMacro, Copy, Clone, Eq, PartialEq)]
pub enum ShiftNote {
    #[strum(serialize = "Họp team buổi sáng")]
    MorningStandup,
    #[strum(serialize = "Làm thêm giờ")]
    Overtime,
    #[strum(serialize = "Training nhân viên mới")]
    NewHireTraining,
    #[strum(serialize = "Kiểm kê kho")]
    Stocktake,
    #[strum(serialize = "Họp với khách hàng")]
    ClientMeeting,
}

/// Every note owns one slot and the same number of slots mean "no note",
/// so half of all draws come back empty.
const POOL_SLOTS: usize = ShiftNote::COUNT * 2;

impl ShiftNote {
    pub fn draw<R: Rng>(rng: &mut R) -> Option<Self> {
        let slot = rng.gen_range(0..POOL_SLOTS);
        ShiftNote::iter().nth(slot)
    }
}
