use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("moniker must not be empty")]
    MonikerEmpty,

    #[error("moniker exceeds length limit of {max} characters")]
    MonikerTooLong { max: usize },

    #[error("job id exceeds length limit of {max} characters")]
    JobIdTooLong { max: usize },

    #[error("sender is unauthorized to add verified round")]
    UnauthorizedAddVerifiedRound,

    #[error("round {round} lower than min round {min_round}")]
    RoundTooLow { round: u64, min_round: u64 },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },

    #[error("invalid randomness length: expected 32 bytes, got {got}")]
    InvalidRandomnessLength { got: usize },

    #[error("previous_signature of round {round} does not match the stored previous round")]
    InvalidSignature { round: u64 },

    #[error("a submission for round {round} from the same bot exists already")]
    SubmissionExists { round: u64 },
}
