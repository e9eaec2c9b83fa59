use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    OwnerMissing = 1,
    CidEmpty = 2,
    QuotaExceeded = 3,
    InvalidTarget = 4,
    VolumeIndexOutOfBounds = 5,
}
