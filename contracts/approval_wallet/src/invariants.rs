#![allow(dead_code)]

extern crate std;

use crate::{ApprovalWalletClient, Transaction};

/// Every confirming address is an owner and the stored count matches the
/// confirming set.
pub fn assert_confirmations_subset_of_owners(client: &ApprovalWalletClient, tx_id: u64) {
    let tx = client.get_transaction(&tx_id);
    let confirmations = client.get_confirmations(&tx_id);
    for confirmer in confirmations.iter() {
        assert!(
            client.is_owner(&confirmer),
            "tx {}: non-owner confirmation recorded",
            tx_id
        );
    }
    assert_eq!(
        tx.confirmations,
        confirmations.len(),
        "tx {}: stored count {} but {} owners confirming",
        tx_id,
        tx.confirmations,
        confirmations.len()
    );
    assert!(
        tx.confirmations <= client.get_owners().len(),
        "tx {}: more confirmations than owners",
        tx_id
    );
}

/// Fields written by `submit` never change.
pub fn assert_transaction_immutable_fields(original: &Transaction, current: &Transaction) {
    assert_eq!(original.id, current.id, "tx id changed");
    assert_eq!(original.submitter, current.submitter, "tx submitter changed");
    assert_eq!(original.destination, current.destination, "tx destination changed");
    assert_eq!(original.value, current.value, "tx value changed");
    assert_eq!(original.data, current.data, "tx data changed");
}

/// An executed transaction had reached quorum.
pub fn assert_executed_had_quorum(client: &ApprovalWalletClient, tx: &Transaction) {
    if tx.executed {
        assert!(
            tx.confirmations >= client.required(),
            "tx {} executed with {} confirmations",
            tx.id,
            tx.confirmations
        );
    }
}

pub fn assert_all_wallet_invariants(client: &ApprovalWalletClient) {
    let required = client.required();
    let owners = client.get_owners();
    assert!(required >= 1 && required <= owners.len(), "quorum out of range");
    for tx_id in 0..client.transaction_count() {
        assert_confirmations_subset_of_owners(client, tx_id);
        assert_executed_had_quorum(client, &client.get_transaction(&tx_id));
    }
}
