mod latest_notices;
mod matching_notices;

pub struct NoticeContracts;
