use stackcheck::jvm::code::*;
use stackcheck::jvm::verifier::SlotKind::*;
use stackcheck::jvm::verifier::{CheckerFlags, CodeTransform, ElementAction, StackChecker};
use stackcheck::jvm::{
    BinaryName, Error, MethodDescriptor, Name, ParseDescriptor, UnqualifiedName, VerifierErrorKind,
};

type Element = CodeElement<SynLabel>;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn insn(instruction: Instruction<SynLabel>) -> Element {
    CodeElement::Instruction(instruction)
}

fn constant(opcode: Opcode) -> Element {
    insn(Instruction::implicit_constant(opcode).unwrap())
}

fn label(label: SynLabel) -> Element {
    CodeElement::Pseudo(PseudoInstruction::Label(label))
}

fn branch(opcode: Opcode, target: SynLabel) -> Element {
    insn(Instruction::Branch(opcode, target))
}

fn catch(handler: SynLabel, try_start: SynLabel, try_end: SynLabel) -> Element {
    CodeElement::Pseudo(PseudoInstruction::ExceptionCatch {
        handler,
        try_start,
        try_end,
        catch_type: Some(BinaryName::EXCEPTION),
    })
}

fn verifier_kind(result: Result<Vec<Element>, Error>) -> VerifierErrorKind {
    match result {
        Err(Error::VerifierError { kind, .. }) => kind,
        other => panic!("expected a verifier error, got {:?}", other),
    }
}

/// Feed the method one element at a time, checking the stack is as expected just before every
/// return and `athrow`
fn check_balanced(checker: &mut StackChecker<SynLabel>, body: &[Element]) {
    checker.at_start();
    for element in body {
        if let CodeElement::Instruction(instruction) = element {
            let expected_len = match instruction {
                Instruction::Return(Opcode::Return) => Some(0),
                Instruction::Return(_) | Instruction::Throw => Some(1),
                _ => None,
            };
            if let (Some(expected_len), true) = (expected_len, checker.is_reachable()) {
                assert_eq!(checker.current_stack().unwrap().len(), expected_len);
            }
        }
        checker.accept(element).unwrap();
    }
    checker.at_end().unwrap();
}

#[test]
fn add_two_constants() {
    init_logging();
    let body = vec![
        constant(Opcode::IConst1),
        constant(Opcode::IConst2),
        insn(Instruction::Operator(Opcode::IAdd)),
        insn(Instruction::Return(Opcode::IReturn)),
    ];
    let expected_stacks: [&[_]; 4] = [&[Int], &[Int, Int], &[Int], &[]];

    let mut checker = StackChecker::new();
    checker.at_start();
    for (element, expected) in body.iter().zip(expected_stacks) {
        assert_eq!(checker.accept(element), Ok(ElementAction::Keep));
        assert_eq!(checker.current_stack(), Some(expected));
    }
    assert!(!checker.is_reachable());
    checker.at_end().unwrap();

    assert_eq!(StackChecker::new().transform_method(body.clone()), Ok(body));
}

#[test]
fn conditional_join() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (otherwise, join) = (labels.fresh_label(), labels.fresh_label());
    let body = vec![
        insn(Instruction::Load(Opcode::ILoad0, 0)),
        branch(Opcode::IfEq, otherwise),
        insn(Instruction::Constant(
            Opcode::Ldc,
            ConstantValue::String(String::from("yes")),
        )),
        branch(Opcode::Goto, join),
        label(otherwise),
        constant(Opcode::AConstNull),
        label(join),
        insn(Instruction::Return(Opcode::AReturn)),
    ];

    let mut checker = StackChecker::new();
    check_balanced(&mut checker, &body);
    assert_eq!(checker.transform_method(body.clone()), Ok(body));
}

#[test]
fn mismatched_join() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (otherwise, join) = (labels.fresh_label(), labels.fresh_label());
    let body = vec![
        insn(Instruction::Load(Opcode::ILoad0, 0)),
        branch(Opcode::IfEq, otherwise),
        constant(Opcode::IConst1),
        branch(Opcode::Goto, join),
        label(otherwise),
        constant(Opcode::AConstNull),
        label(join),
        insn(Instruction::Return(Opcode::AReturn)),
    ];

    let result = StackChecker::new().transform_method(body);
    assert_eq!(
        verifier_kind(result),
        VerifierErrorKind::StackMergeConflict {
            label: format!("{:?}", join),
            recorded: vec![Int],
            found: vec![Reference],
        }
    );
}

#[test]
fn loop_with_backward_branch() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (top, done) = (labels.fresh_label(), labels.fresh_label());
    let body = vec![
        constant(Opcode::IConst0),
        insn(Instruction::Store(Opcode::IStore1, 1)),
        label(top),
        insn(Instruction::Load(Opcode::ILoad1, 1)),
        insn(Instruction::Constant(
            Opcode::BiPush,
            ConstantValue::Int(10),
        )),
        branch(Opcode::IfICmpGe, done),
        insn(Instruction::Increment(1, 1)),
        branch(Opcode::Goto, top),
        label(done),
        insn(Instruction::Return(Opcode::Return)),
    ];
    check_balanced(&mut StackChecker::new(), &body);

    // Leaving something on the stack on the way back round is caught at the `goto`
    let mut leaky = body;
    leaky.insert(7, constant(Opcode::IConst1));
    let result = StackChecker::new().transform_method(leaky);
    assert!(matches!(
        verifier_kind(result),
        VerifierErrorKind::StackMergeConflict { .. }
    ));
}

#[test]
fn unreachable_instruction() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let end = labels.fresh_label();
    let body = vec![
        branch(Opcode::Goto, end),
        constant(Opcode::IConst1),
        label(end),
        insn(Instruction::Return(Opcode::Return)),
    ];

    for mut checker in [StackChecker::new(), StackChecker::strict()] {
        let result = checker.transform_method(body.clone());
        assert_eq!(verifier_kind(result), VerifierErrorKind::UnreachableCode);
    }
}

#[test]
fn code_after_return_and_throw() {
    init_logging();
    let after_return = vec![
        insn(Instruction::Return(Opcode::Return)),
        insn(Instruction::Nop),
    ];
    let after_throw = vec![
        constant(Opcode::AConstNull),
        insn(Instruction::Throw),
        insn(Instruction::Return(Opcode::Return)),
    ];
    for body in [after_return, after_throw] {
        let result = StackChecker::new().transform_method(body);
        assert_eq!(verifier_kind(result), VerifierErrorKind::UnreachableCode);
    }
}

#[test]
fn filler_resolved_by_recorded_label() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let join = labels.fresh_label();
    let body = vec![
        constant(Opcode::LConst1),
        insn(Instruction::Load(Opcode::ILoad0, 0)),
        branch(Opcode::IfNe, join),
        insn(Instruction::Operator(Opcode::LNeg)),
        branch(Opcode::Goto, join),
        constant(Opcode::LConst0),
        label(join),
        insn(Instruction::Return(Opcode::LReturn)),
    ];

    let mut checker = StackChecker::new();
    let kept = checker.transform_method(body.clone()).unwrap();
    let mut expected = body;
    expected.remove(5);
    assert_eq!(kept, expected);
}

#[test]
fn filler_contradicting_recorded_label() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let end = labels.fresh_label();

    // `end` expects an int, the filler claims a reference and a double
    let body = vec![
        constant(Opcode::IConst1),
        branch(Opcode::Goto, end),
        constant(Opcode::AConstNull),
        constant(Opcode::DConst0),
        label(end),
        insn(Instruction::Return(Opcode::IReturn)),
    ];
    let result = StackChecker::new().transform_method(body);
    assert_eq!(
        verifier_kind(result),
        VerifierErrorKind::StackMergeConflict {
            label: String::from("l1"),
            recorded: vec![Int],
            found: vec![Reference, Double],
        }
    );

    // Too much filler is just as wrong as the wrong kind
    let body = vec![
        constant(Opcode::IConst1),
        branch(Opcode::Goto, end),
        constant(Opcode::IConst0),
        constant(Opcode::IConst0),
        label(end),
        insn(Instruction::Return(Opcode::IReturn)),
    ];
    let result = StackChecker::new().transform_method(body);
    assert!(matches!(
        verifier_kind(result),
        VerifierErrorKind::StackMergeConflict { .. }
    ));
}

#[test]
fn partial_filler_is_completed_by_recorded_label() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let end = labels.fresh_label();
    let body = vec![
        constant(Opcode::FConst1),
        constant(Opcode::LConst1),
        branch(Opcode::Goto, end),
        constant(Opcode::FConst0),
        label(end),
        insn(Instruction::Stack(Opcode::Pop2)),
        insn(Instruction::Return(Opcode::FReturn)),
    ];

    let mut checker = StackChecker::new();
    checker.at_start();
    for element in &body[..5] {
        checker.accept(element).unwrap();
    }
    assert_eq!(checker.current_stack(), Some(&[Float, Long][..]));
    for element in &body[5..] {
        checker.accept(element).unwrap();
    }
    checker.at_end().unwrap();
}

#[test]
#[cfg(debug_assertions)]
fn filler_value_must_match_opcode() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let end = labels.fresh_label();
    let body = vec![
        branch(Opcode::Goto, end),
        insn(Instruction::Constant(Opcode::IConst0, ConstantValue::Null)),
        label(end),
        insn(Instruction::Return(Opcode::Return)),
    ];
    let result = StackChecker::new().transform_method(body);
    assert_eq!(
        verifier_kind(result),
        VerifierErrorKind::MisclassifiedOpcode {
            category: Category::Constant,
            opcode: Opcode::IConst0,
        }
    );

    let live = vec![
        insn(Instruction::Constant(Opcode::IConst1, ConstantValue::Null)),
        insn(Instruction::Return(Opcode::AReturn)),
    ];
    let result = StackChecker::new().transform_method(live);
    assert!(matches!(
        verifier_kind(result),
        VerifierErrorKind::MisclassifiedOpcode { .. }
    ));
}

#[test]
fn filler_establishes_shape_of_pending_label() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (join, handler_like) = (labels.fresh_label(), labels.fresh_label());
    let body = vec![
        constant(Opcode::IConst1),
        branch(Opcode::Goto, join),
        constant(Opcode::AConstNull),
        label(handler_like),
        insn(Instruction::Return(Opcode::AReturn)),
        label(join),
        insn(Instruction::Return(Opcode::IReturn)),
    ];

    let mut checker = StackChecker::new();
    checker.at_start();
    let actions: Vec<ElementAction> = body
        .iter()
        .map(|element| checker.accept(element).unwrap())
        .collect();
    assert_eq!(actions[2], ElementAction::Drop);
    let drops = actions.iter().filter(|a| **a == ElementAction::Drop);
    assert_eq!(drops.count(), 1);
    assert_eq!(checker.lookup_shape(&handler_like), Some(&[Reference][..]));
    assert_eq!(checker.lookup_shape(&join), Some(&[Int][..]));
    checker.at_end().unwrap();
}

#[test]
fn unresolved_filler_is_not_an_error_but_what_follows_is() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let end = labels.fresh_label();

    let filler_only = vec![
        branch(Opcode::Goto, end),
        label(end),
        insn(Instruction::Return(Opcode::Return)),
        constant(Opcode::DConst0),
        constant(Opcode::FConst0),
    ];
    let kept = StackChecker::new().transform_method(filler_only).unwrap();
    assert_eq!(
        kept,
        vec![
            branch(Opcode::Goto, end),
            label(end),
            insn(Instruction::Return(Opcode::Return))
        ]
    );

    let filler_then_code = vec![
        branch(Opcode::Goto, end),
        constant(Opcode::AConstNull),
        insn(Instruction::Stack(Opcode::Pop)),
        label(end),
        insn(Instruction::Return(Opcode::Return)),
    ];
    let result = StackChecker::new().transform_method(filler_then_code);
    assert_eq!(verifier_kind(result), VerifierErrorKind::UnreachableCode);
}

#[test]
fn strict_checker_rejects_filler() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let end = labels.fresh_label();
    let body = vec![
        branch(Opcode::Goto, end),
        constant(Opcode::AConstNull),
        label(end),
        insn(Instruction::Return(Opcode::Return)),
    ];

    let result = StackChecker::strict().transform_method(body.clone());
    assert_eq!(verifier_kind(result), VerifierErrorKind::UnreachableCode);

    let result = StackChecker::with_flags(CheckerFlags::TRACE).transform_method(body.clone());
    assert_eq!(verifier_kind(result), VerifierErrorKind::UnreachableCode);

    assert!(StackChecker::new().transform_method(body).is_ok());
}

#[test]
fn checking_is_deterministic() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (pending, join) = (labels.fresh_label(), labels.fresh_label());
    let body = vec![
        constant(Opcode::IConst0),
        branch(Opcode::Goto, join),
        constant(Opcode::IConst0),
        label(pending),
        insn(Instruction::Return(Opcode::IReturn)),
        label(join),
        insn(Instruction::Return(Opcode::IReturn)),
    ];

    let mut checker = StackChecker::new();
    let first = checker.transform_method(body.clone());
    let second = checker.transform_method(body.clone());
    let third = StackChecker::new().transform_method(body);
    assert!(first.is_ok());
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn wide_stack_shuffles() {
    init_logging();
    let body = vec![
        constant(Opcode::LConst1),
        insn(Instruction::Stack(Opcode::Dup2)),
        constant(Opcode::IConst1),
        constant(Opcode::IConst2),
        insn(Instruction::Stack(Opcode::Dup2)),
        constant(Opcode::IConst0),
        constant(Opcode::AConstNull),
        insn(Instruction::Stack(Opcode::Swap)),
    ];
    let expected_stacks: [&[_]; 8] = [
        &[Long],
        &[Long, Long],
        &[Long, Long, Int],
        &[Long, Long, Int, Int],
        &[Long, Long, Int, Int, Int, Int],
        &[Long, Long, Int, Int, Int, Int, Int],
        &[Long, Long, Int, Int, Int, Int, Int, Reference],
        &[Long, Long, Int, Int, Int, Int, Reference, Int],
    ];

    let mut checker = StackChecker::new();
    checker.at_start();
    for (element, expected) in body.iter().zip(expected_stacks) {
        checker.accept(element).unwrap();
        assert_eq!(checker.current_stack(), Some(expected));
    }

    let err = checker
        .accept(&insn(Instruction::Stack(Opcode::DupX1)))
        .and_then(|_| checker.accept(&insn(Instruction::Stack(Opcode::Pop2))))
        .and_then(|_| checker.accept(&insn(Instruction::Stack(Opcode::Pop2))))
        .and_then(|_| checker.accept(&insn(Instruction::Stack(Opcode::Pop2))))
        .and_then(|_| checker.accept(&insn(Instruction::Stack(Opcode::Swap))))
        .unwrap_err();
    assert_eq!(
        err.verifier_kind(),
        Some(&VerifierErrorKind::InvalidStackShuffle(Long))
    );
}

#[test]
fn exception_handler_entry() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (try_start, try_end, handler) = (
        labels.fresh_label(),
        labels.fresh_label(),
        labels.fresh_label(),
    );
    let wait = MethodRef {
        owner: BinaryName::OBJECT,
        name: UnqualifiedName::from_str("wait").unwrap(),
        descriptor: MethodDescriptor::parse("(JI)V").unwrap(),
        is_interface: false,
    };
    let body = vec![
        catch(handler, try_start, try_end),
        label(try_start),
        insn(Instruction::Load(Opcode::ALoad0, 0)),
        constant(Opcode::LConst1),
        constant(Opcode::IConst0),
        insn(Instruction::Invoke(Opcode::InvokeVirtual, wait)),
        label(try_end),
        insn(Instruction::Return(Opcode::Return)),
        label(handler),
        insn(Instruction::Store(Opcode::AStore1, 1)),
        insn(Instruction::Return(Opcode::Return)),
    ];

    let mut checker = StackChecker::new();
    check_balanced(&mut checker, &body);

    // The handler shape doesn't depend on the stack where the edge is declared
    checker.at_start();
    for element in &body[1..5] {
        checker.accept(element).unwrap();
    }
    assert_eq!(checker.current_stack(), Some(&[Reference, Long, Int][..]));
    checker.accept(&body[0]).unwrap();
    assert_eq!(checker.lookup_shape(&handler), Some(&[Reference][..]));
}

#[test]
fn exception_handler_conflict() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (try_start, try_end, handler) = (
        labels.fresh_label(),
        labels.fresh_label(),
        labels.fresh_label(),
    );
    let body = vec![
        constant(Opcode::IConst0),
        branch(Opcode::Goto, handler),
        catch(handler, try_start, try_end),
        label(try_start),
        label(try_end),
        label(handler),
        insn(Instruction::Return(Opcode::IReturn)),
    ];

    let result = StackChecker::new().transform_method(body);
    assert_eq!(
        verifier_kind(result),
        VerifierErrorKind::StackMergeConflict {
            label: format!("{:?}", handler),
            recorded: vec![Int],
            found: vec![Reference],
        }
    );
}

#[test]
fn switch_targets_share_shape() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (one, two, fallback, join) = (
        labels.fresh_label(),
        labels.fresh_label(),
        labels.fresh_label(),
        labels.fresh_label(),
    );
    let body = vec![
        insn(Instruction::Load(Opcode::DLoad1, 1)),
        insn(Instruction::Load(Opcode::ILoad0, 0)),
        insn(Instruction::LookupSwitch {
            default: fallback,
            cases: vec![
                SwitchCase {
                    value: 1,
                    target: one,
                },
                SwitchCase {
                    value: 2,
                    target: two,
                },
            ],
        }),
        label(one),
        insn(Instruction::Operator(Opcode::DNeg)),
        branch(Opcode::Goto, join),
        label(two),
        insn(Instruction::Convert(Opcode::D2F)),
        insn(Instruction::Convert(Opcode::F2D)),
        label(fallback),
        label(join),
        insn(Instruction::Return(Opcode::DReturn)),
    ];

    let mut checker = StackChecker::new();
    checker.at_start();
    for element in &body {
        checker.accept(element).unwrap();
    }
    for target in [one, two, fallback, join] {
        assert_eq!(checker.lookup_shape(&target), Some(&[Double][..]));
    }
    checker.at_end().unwrap();
}

#[test]
fn table_switch_with_mismatched_case() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (zero, fallback) = (labels.fresh_label(), labels.fresh_label());
    let body = vec![
        constant(Opcode::IConst0),
        branch(Opcode::IfEq, zero),
        constant(Opcode::FConst1),
        constant(Opcode::IConst0),
        insn(Instruction::TableSwitch {
            low: 0,
            high: 0,
            default: fallback,
            cases: vec![zero],
        }),
        label(zero),
        label(fallback),
        insn(Instruction::Return(Opcode::Return)),
    ];

    let result = StackChecker::new().transform_method(body);
    assert!(matches!(
        verifier_kind(result),
        VerifierErrorKind::StackMergeConflict { .. }
    ));
}

#[test]
fn legacy_subroutine() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let subroutine = labels.fresh_label();
    let body = vec![
        insn(Instruction::Jsr(Opcode::Jsr, subroutine)),
        insn(Instruction::Return(Opcode::Return)),
        label(subroutine),
        insn(Instruction::Store(Opcode::AStore1, 1)),
        insn(Instruction::Ret(1)),
    ];

    let mut checker = StackChecker::new();
    check_balanced(&mut checker, &body);
}

#[test]
fn ret_ends_reachable_code() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (subroutine, after) = (labels.fresh_label(), labels.fresh_label());

    let body = vec![
        insn(Instruction::Ret(1)),
        insn(Instruction::Return(Opcode::Return)),
    ];
    let result = StackChecker::new().transform_method(body);
    assert_eq!(verifier_kind(result), VerifierErrorKind::UnreachableCode);

    // A label after `ret` makes the code reachable again
    let body = vec![
        insn(Instruction::Jsr(Opcode::Jsr, subroutine)),
        branch(Opcode::Goto, after),
        label(subroutine),
        insn(Instruction::Store(Opcode::AStore1, 1)),
        insn(Instruction::Ret(1)),
        label(after),
        insn(Instruction::Return(Opcode::Return)),
    ];
    let mut checker = StackChecker::new();
    check_balanced(&mut checker, &body);
}

#[test]
fn pending_labels_adopt_recorded_shape() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let (join, pending) = (labels.fresh_label(), labels.fresh_label());
    let body = vec![
        constant(Opcode::FConst2),
        branch(Opcode::Goto, join),
        label(pending),
        label(join),
        insn(Instruction::Return(Opcode::FReturn)),
    ];

    let mut checker = StackChecker::new();
    checker.at_start();
    for element in &body[..3] {
        checker.accept(element).unwrap();
    }
    assert_eq!(checker.lookup_shape(&pending), None);
    assert!(!checker.is_reachable());
    checker.accept(&body[3]).unwrap();
    assert!(checker.is_reachable());
    assert_eq!(checker.lookup_shape(&pending), Some(&[Float][..]));
    checker.accept(&body[4]).unwrap();
    checker.at_end().unwrap();
}

#[test]
fn misclassified_opcode() {
    init_logging();
    let body = vec![
        constant(Opcode::IConst1),
        constant(Opcode::IConst1),
        insn(Instruction::Stack(Opcode::IAdd)),
    ];
    let result = StackChecker::new().transform_method(body);
    assert_eq!(
        verifier_kind(result),
        VerifierErrorKind::MisclassifiedOpcode {
            category: Category::Stack,
            opcode: Opcode::IAdd,
        }
    );
}

#[test]
fn lifecycle_misuse() {
    init_logging();
    let mut checker = StackChecker::<SynLabel>::new();
    let err = checker.accept(&constant(Opcode::IConst0)).unwrap_err();
    assert!(matches!(err, Error::NotInMethodBody { .. }));
    assert_eq!(err.verifier_kind(), None);
    assert!(matches!(
        checker.at_end(),
        Err(Error::NotInMethodBody { .. })
    ));
}

#[test]
fn error_messages() {
    init_logging();
    let mut labels = SynLabelGenerator::default();
    let join = labels.fresh_label();
    let body = vec![
        constant(Opcode::IConst0),
        branch(Opcode::Goto, join),
        label(join),
        constant(Opcode::AConstNull),
        branch(Opcode::Goto, join),
    ];
    let err = StackChecker::new().transform_method(body).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("mismatched stack for label l1"), "{}", msg);
    assert!(msg.contains("[int]"), "{}", msg);
    assert!(msg.contains("[int, reference]"), "{}", msg);
}
