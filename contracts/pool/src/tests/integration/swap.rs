use std::cell::RefCell;

use cosmwasm_std::{coin, Uint256};
use test_case::test_case;

use faucet_token::ContractError as TokenError;
use simple_dex_std::pool::SwapDirection;
use test_utils::common_constants::{INITIAL_SUPPLY, ONE_THOUSAND, TWO_THOUSAND};

use crate::tests::integration::helpers::chain_contains;
use crate::tests::suite::TestingSuite;
use crate::ContractError;

/// Creates a pool holding 1000 of asset A and 2000 of asset B, provided by the creator.
fn reference_pool() -> TestingSuite {
    let mut suite = TestingSuite::default();
    let creator = suite.creator();

    suite.instantiate_default().approve_and_add_liquidity(
        &creator,
        Uint256::from(ONE_THOUSAND),
        Uint256::from(TWO_THOUSAND),
    );

    suite
}

#[test]
fn swap_a_to_b_reference_scenario() {
    let mut suite = reference_pool();
    let creator = suite.creator();
    let (token_a, token_b) = (suite.token_a.clone(), suite.token_b.clone());

    suite.query_quote(
        Uint256::from(100u128),
        Uint256::from(ONE_THOUSAND),
        Uint256::from(TWO_THOUSAND),
        |result| {
            assert_eq!(result.unwrap().amount_out, Uint256::from(181u128));
        },
    );

    // asking for one more than the quote trips the slippage guard
    suite
        .approve_and_swap(
            &creator,
            SwapDirection::AToB,
            Uint256::from(100u128),
            Uint256::from(182u128),
            |result| {
                let err = result.unwrap_err().downcast::<ContractError>().unwrap();
                assert_eq!(
                    err,
                    ContractError::InsufficientAmountOut {
                        amount_out: Uint256::from(181u128),
                        min_amount_out: Uint256::from(182u128),
                    }
                );
            },
        )
        .query_reserves(|result| {
            let reserves = result.unwrap();
            assert_eq!(reserves.reserve_a, Uint256::from(ONE_THOUSAND));
            assert_eq!(reserves.reserve_b, Uint256::from(TWO_THOUSAND));
        });

    // asking for exactly the quote succeeds
    suite
        .approve_and_swap(
            &creator,
            SwapDirection::AToB,
            Uint256::from(100u128),
            Uint256::from(181u128),
            |result| {
                let response = result.unwrap();
                assert!(response.events.iter().any(|event| event
                    .attributes
                    .iter()
                    .any(|attr| attr.key == "reserves" && attr.value == "1100,1819")));
            },
        )
        .query_reserves(|result| {
            let reserves = result.unwrap();
            assert_eq!(reserves.reserve_a, Uint256::from(1_100u128));
            assert_eq!(reserves.reserve_b, Uint256::from(1_819u128));
        })
        .query_balance(&token_a, &creator, |result| {
            assert_eq!(
                result.unwrap().balance,
                Uint256::from(INITIAL_SUPPLY - ONE_THOUSAND - 100)
            );
        })
        .query_balance(&token_b, &creator, |result| {
            assert_eq!(
                result.unwrap().balance,
                Uint256::from(INITIAL_SUPPLY - TWO_THOUSAND + 181)
            );
        });
}

#[test]
fn swap_b_to_a() {
    let mut suite = reference_pool();
    let creator = suite.creator();
    let token_a = suite.token_a.clone();

    // floor(200 * 1000 / 2200) = 90
    suite
        .query_simulation(SwapDirection::BToA, Uint256::from(200u128), |result| {
            let simulation = result.unwrap();
            assert_eq!(simulation.amount_out, Uint256::from(90u128));
            assert_eq!(simulation.reserve_in, Uint256::from(TWO_THOUSAND));
            assert_eq!(simulation.reserve_out, Uint256::from(ONE_THOUSAND));
        })
        .approve_and_swap(
            &creator,
            SwapDirection::BToA,
            Uint256::from(200u128),
            Uint256::from(90u128),
            |result| {
                result.unwrap();
            },
        )
        .query_reserves(|result| {
            let reserves = result.unwrap();
            assert_eq!(reserves.reserve_a, Uint256::from(910u128));
            assert_eq!(reserves.reserve_b, Uint256::from(2_200u128));
        })
        .query_balance(&token_a, &creator, |result| {
            assert_eq!(
                result.unwrap().balance,
                Uint256::from(INITIAL_SUPPLY - ONE_THOUSAND + 90)
            );
        });
}

#[test_case(0, true ; "deadline is now")]
#[test_case(1, true ; "deadline is in the future")]
#[test_case(-1, false ; "deadline has passed")]
fn swap_deadline(offset: i64, succeeds: bool) {
    let mut suite = reference_pool();
    let creator = suite.creator();
    let token_a = suite.token_a.clone();

    let now = suite.get_time();
    let deadline = now.checked_add_signed(offset).unwrap();

    suite
        .approve_pool(&creator, &token_a, Uint256::from(100u128), |result| {
            result.unwrap();
        })
        .swap(
            &creator,
            SwapDirection::AToB,
            Uint256::from(100u128),
            Uint256::zero(),
            deadline,
            vec![],
            |result| {
                if succeeds {
                    result.unwrap();
                } else {
                    let err = result.unwrap_err().downcast::<ContractError>().unwrap();
                    assert_eq!(err, ContractError::DeadlineExceeded { deadline, now });
                }
            },
        );
}

#[test]
fn swap_zero_amount_fails() {
    let mut suite = reference_pool();
    let creator = suite.creator();
    let deadline = suite.get_time();

    suite.swap(
        &creator,
        SwapDirection::AToB,
        Uint256::zero(),
        Uint256::zero(),
        deadline,
        vec![],
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();
            assert_eq!(err, ContractError::ZeroAmount);
        },
    );
}

#[test]
fn swap_checks_deadline_before_amount() {
    let mut suite = reference_pool();
    let creator = suite.creator();
    let deadline = suite.get_time() - 1;

    suite.swap(
        &creator,
        SwapDirection::BToA,
        Uint256::zero(),
        Uint256::zero(),
        deadline,
        vec![],
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();
            match err {
                ContractError::DeadlineExceeded { .. } => {}
                _ => panic!("Wrong error type, should return ContractError::DeadlineExceeded"),
            }
        },
    );
}

#[test]
fn swap_on_empty_pool_fails() {
    let mut suite = TestingSuite::default();
    let creator = suite.creator();

    suite.instantiate_default().approve_and_swap(
        &creator,
        SwapDirection::AToB,
        Uint256::from(100u128),
        Uint256::zero(),
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();
            assert_eq!(err, ContractError::InsufficientLiquidity);
        },
    );
}

#[test]
fn swap_with_funds_fails() {
    let mut suite = reference_pool();
    let creator = suite.creator();
    let deadline = suite.get_time();

    suite.swap(
        &creator,
        SwapDirection::AToB,
        Uint256::from(100u128),
        Uint256::zero(),
        deadline,
        vec![coin(1_000u128, "uom")],
        |result| {
            let err = result.unwrap_err().downcast::<ContractError>().unwrap();
            match err {
                ContractError::PaymentError(_) => {}
                _ => panic!("Wrong error type, should return ContractError::PaymentError"),
            }
        },
    );
}

#[test]
fn swap_without_allowance_reverts() {
    let mut suite = reference_pool();
    let trader = suite.senders[1].clone();
    let (token_a, token_b) = (suite.token_a.clone(), suite.token_b.clone());
    let pool = suite.pool.clone();
    let deadline = suite.get_time() + 600;

    // the trader holds tokens but never approved the pool
    suite
        .faucet(&trader, &token_a, |result| {
            result.unwrap();
        })
        .swap(
            &trader,
            SwapDirection::AToB,
            Uint256::from(100u128),
            Uint256::zero(),
            deadline,
            vec![],
            |result| {
                let err = result.unwrap_err();
                assert!(chain_contains(
                    &err,
                    &TokenError::InsufficientAllowance {
                        allowance: Uint256::zero(),
                        required: Uint256::from(100u128),
                    }
                ));
            },
        )
        // nothing moved
        .query_reserves(|result| {
            let reserves = result.unwrap();
            assert_eq!(reserves.reserve_a, Uint256::from(ONE_THOUSAND));
            assert_eq!(reserves.reserve_b, Uint256::from(TWO_THOUSAND));
        })
        .query_balance(&token_b, &trader, |result| {
            assert_eq!(result.unwrap().balance, Uint256::zero());
        })
        .query_balance(&token_b, &pool, |result| {
            assert_eq!(result.unwrap().balance, Uint256::from(TWO_THOUSAND));
        });
}

#[test]
fn swap_without_balance_reverts() {
    let mut suite = reference_pool();
    let trader = suite.senders[2].clone();

    // the approval alone doesn't fund the swap
    suite.approve_and_swap(
        &trader,
        SwapDirection::BToA,
        Uint256::from(100u128),
        Uint256::zero(),
        |result| {
            let err = result.unwrap_err();
            assert!(chain_contains(
                &err,
                &TokenError::InsufficientBalance {
                    available: Uint256::zero(),
                    required: Uint256::from(100u128),
                }
            ));
        },
    );

    suite.query_reserves(|result| {
        let reserves = result.unwrap();
        assert_eq!(reserves.reserve_a, Uint256::from(ONE_THOUSAND));
        assert_eq!(reserves.reserve_b, Uint256::from(TWO_THOUSAND));
    });
}

#[test]
fn round_trip_returns_less() {
    let mut suite = reference_pool();
    let creator = suite.creator();
    let token_a = suite.token_a.clone();

    let amount_in = Uint256::from(100u128);
    let amount_b = RefCell::new(Uint256::zero());
    let balance_a = RefCell::new(Uint256::zero());

    suite
        .query_balance(&token_a, &creator, |result| {
            *balance_a.borrow_mut() = result.unwrap().balance;
        })
        .query_simulation(SwapDirection::AToB, amount_in, |result| {
            *amount_b.borrow_mut() = result.unwrap().amount_out;
        })
        .approve_and_swap(
            &creator,
            SwapDirection::AToB,
            amount_in,
            Uint256::zero(),
            |result| {
                result.unwrap();
            },
        );

    let amount_b = *amount_b.borrow();
    let balance_before = *balance_a.borrow();

    suite
        .approve_and_swap(
            &creator,
            SwapDirection::BToA,
            amount_b,
            Uint256::zero(),
            |result| {
                result.unwrap();
            },
        )
        .query_balance(&token_a, &creator, |result| {
            let balance_after = result.unwrap().balance;
            let amount_back = balance_after - (balance_before - amount_in);
            assert!(amount_back < amount_in);
        });
}
