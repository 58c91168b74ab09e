//! Cross-module interaction tests
//!
//! Tests the integration between the loader, the architecture definitions,
//! and the execution engine.

use ls8_isa::{AluOp, Flags, Instruction, Opcode, Program, Register, STACK_INIT};
use ls8_loader::parse;
use ls8_vm::{alu, AluOutcome, Cpu, CpuConfig, VmError};

// ============================================================================
// Loader -> Decoder Tests
// ============================================================================

#[test]
fn test_parsed_bytes_decode() {
    let source = r#"
        10000010 # LDI R0,8
        00000000
        00001000
    "#;

    let program = parse(source).unwrap();
    let bytes = program.bytes();
    let instruction = Instruction::decode(bytes[0], bytes[1], bytes[2]).unwrap();

    assert_eq!(
        instruction,
        Instruction::Ldi {
            reg: Register::R0,
            value: 8,
        }
    );
}

#[test]
fn test_parsed_opcode_bytes_match_table() {
    let source = r#"
        10100010 # MUL
        00000000
        00000001
        01000101 # PUSH
        00000000
    "#;

    let program = parse(source).unwrap();
    assert_eq!(Opcode::from_u8(program.bytes()[0]), Some(Opcode::Mul));
    assert_eq!(Opcode::from_u8(program.bytes()[3]), Some(Opcode::Push));
}

#[test]
fn test_decoded_image_walk() {
    // Walk a parsed image the way the CPU does: opcode plus the bytes it
    // consumes, stepping by 1 + operand_count each time
    let source = r#"
        10000010 # LDI R0,8
        00000000
        00001000
        01000111 # PRN R0
        00000000
        00000001 # HLT
    "#;

    let program = parse(source).unwrap();
    let bytes = program.bytes();

    let mut mnemonics = Vec::new();
    let mut address = 0;
    while address < bytes.len() {
        let opcode = Opcode::from_u8(bytes[address]).unwrap();
        mnemonics.push(opcode.mnemonic());
        address += 1 + opcode.operand_count() as usize;
    }

    assert_eq!(mnemonics, vec!["LDI", "PRN", "HLT"]);
    assert_eq!(address, bytes.len());
}

// ============================================================================
// Loader -> Runtime Tests
// ============================================================================

#[test]
fn test_parsed_program_runs() {
    let source = r#"
        10000010 # LDI R2,200
        00000010
        11001000
        00000001 # HLT
    "#;

    let program = parse(source).unwrap();
    let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
    cpu.run().unwrap();

    assert_eq!(cpu.registers().get(Register::R2), 200);
    assert!(cpu.is_halted());
}

#[test]
fn test_out_of_range_register_operand_faults_at_decode() {
    // Byte 8 in a register slot passes the loader (it is a valid byte)
    // and faults in the VM when decoded
    let source = r#"
        01000111 # PRN 8
        00001000
    "#;

    let program = parse(source).unwrap();
    let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
    let err = cpu.run().unwrap_err();

    assert!(matches!(err, VmError::InvalidRegister { index: 8, pc: 0 }));
}

#[test]
fn test_fault_preserves_machine_state() {
    // LDI executes, the bad opcode faults; R0 keeps its value and PC
    // points at the faulting byte
    let source = r#"
        10000010 # LDI R0,55
        00000000
        00110111
        11111111 # not an opcode
    "#;

    let program = parse(source).unwrap();
    let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
    let err = cpu.run().unwrap_err();

    assert!(matches!(
        err,
        VmError::UnknownInstruction { opcode: 0xFF, pc: 3 }
    ));
    assert_eq!(cpu.registers().get(Register::R0), 55);
    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.cycles(), 1);
}

// ============================================================================
// ALU <-> Runtime Consistency
// ============================================================================

#[test]
fn test_cpu_cmp_matches_alu() {
    for (a, b) in [(5u8, 3u8), (3, 5), (4, 4), (0, 255)] {
        let program = Program::new(vec![
            0x82, 0, a, // LDI R0,a
            0x82, 1, b, // LDI R1,b
            0xA7, 0, 1, // CMP R0,R1
            0x01, // HLT
        ]);

        let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
        cpu.run().unwrap();

        let expected = match alu::compute(AluOp::Cmp, a, b).unwrap() {
            AluOutcome::Flags(flags) => flags,
            AluOutcome::Value(_) => panic!("CMP must produce flags"),
        };
        assert_eq!(cpu.flags(), expected, "CMP {a},{b}");
    }
}

#[test]
fn test_cpu_add_matches_alu() {
    for (a, b) in [(10u8, 20u8), (200, 100), (255, 255)] {
        let program = Program::new(vec![
            0x82, 0, a, // LDI R0,a
            0x82, 1, b, // LDI R1,b
            0xA0, 0, 1, // ADD R0,R1
            0x01, // HLT
        ]);

        let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
        cpu.run().unwrap();

        let expected = match alu::compute(AluOp::Add, a, b).unwrap() {
            AluOutcome::Value(value) => value,
            AluOutcome::Flags(_) => panic!("ADD must produce a value"),
        };
        assert_eq!(cpu.registers().get(Register::R0), expected, "ADD {a},{b}");
    }
}

#[test]
fn test_flags_start_clear_and_survive_non_cmp() {
    let program = Program::new(vec![
        0x82, 0, 4, // LDI R0,4
        0x82, 1, 4, // LDI R1,4
        0xA7, 0, 1, // CMP R0,R1 (sets E)
        0xA0, 0, 1, // ADD R0,R1 (does not touch FL)
        0x01, // HLT
    ]);

    let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
    assert_eq!(cpu.flags(), Flags::CLEAR);

    cpu.run().unwrap();
    assert!(cpu.flags().equal());
}

// ============================================================================
// Whole-Machine Scenarios
// ============================================================================

#[test]
fn test_fibonacci_via_stack_and_loop() {
    // Ten iterations of a = old_b, b = a + b, using PUSH/POP to move the
    // old value of R1 into R0. Prints fib(10) = 55.
    let source = r#"
        10000010 # 0: LDI R0,0 (a)
        00000000
        00000000
        10000010 # 3: LDI R1,1 (b)
        00000001
        00000001
        10000010 # 6: LDI R3,10 (counter)
        00000011
        00001010
        10000010 # 9: LDI R4,1
        00000100
        00000001
        10000010 # 12: LDI R6,15 (loop address)
        00000110
        00001111
        01000101 # 15: PUSH R1
        00000001
        10100000 # 17: ADD R1,R0
        00000001
        00000000
        01000110 # 20: POP R0
        00000000
        10100001 # 22: SUB R3,R4
        00000011
        00000100
        10100111 # 25: CMP R3,R5 (R5 is 0)
        00000011
        00000101
        01010110 # 28: JNE R6
        00000110
        01000111 # 30: PRN R0
        00000000
        00000001 # 32: HLT
    "#;

    let program = parse(source).unwrap();
    let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
    let result = cpu.run().unwrap();

    assert_eq!(result.outputs, vec![55]);
    assert_eq!(cpu.registers().sp(), STACK_INIT);
}

#[test]
fn test_trace_mode_does_not_change_results() {
    let program = Program::new(vec![
        0x82, 0, 8, // LDI R0,8
        0x47, 0, // PRN R0
        0x01, // HLT
    ]);

    let mut plain = Cpu::new(&program, CpuConfig::default()).unwrap();
    let mut traced = Cpu::new(&program, CpuConfig { trace: true }).unwrap();

    let plain_result = plain.run().unwrap();
    let traced_result = traced.run().unwrap();

    assert_eq!(plain_result.outputs, traced_result.outputs);
    assert_eq!(plain_result.cycles, traced_result.cycles);
    assert_eq!(plain.pc(), traced.pc());
}

#[test]
fn test_step_and_run_agree() {
    let bytes = vec![
        0x82, 0, 8, // LDI R0,8
        0x82, 1, 9, // LDI R1,9
        0xA2, 0, 1, // MUL R0,R1
        0x47, 0, // PRN R0
        0x01, // HLT
    ];

    let program = Program::new(bytes);

    let mut stepped = Cpu::new(&program, CpuConfig::default()).unwrap();
    while !stepped.is_halted() {
        stepped.step().unwrap();
    }

    let mut ran = Cpu::new(&program, CpuConfig::default()).unwrap();
    ran.run().unwrap();

    assert_eq!(stepped.pc(), ran.pc());
    assert_eq!(stepped.cycles(), ran.cycles());
    assert_eq!(stepped.outputs(), ran.outputs());
    assert_eq!(stepped.registers().values(), ran.registers().values());
}

#[test]
fn test_run_helper_matches_manual_drive() {
    let program = Program::new(vec![
        0x82, 0, 8, // LDI R0,8
        0x47, 0, // PRN R0
        0x01, // HLT
    ]);

    let outputs = ls8_vm::run(&program).unwrap();

    let mut cpu = Cpu::new(&program, CpuConfig::default()).unwrap();
    let result = cpu.run().unwrap();

    assert_eq!(outputs, result.outputs);
}
