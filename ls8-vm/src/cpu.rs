//! The LS8 execution engine

use crate::alu::{self, AluError, AluOutcome};
use crate::error::{Result, VmError};
use crate::io::OutputHandler;
use crate::memory::Memory;
use crate::registers::RegisterFile;
use ls8_isa::{Flags, Instruction, IsaError, Program, Register};

/// CPU configuration
#[derive(Debug, Clone, Default)]
pub struct CpuConfig {
    /// Print machine state to stderr before every step
    pub trace: bool,
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub cycles: u64,

    /// Values printed by PRN, in order
    pub outputs: Vec<u8>,
}

/// The LS8 CPU
///
/// Owns all machine state. One fetch-decode-execute step at a time; every
/// handler advances PC itself, by the instruction width or by writing PC
/// outright for jumps, CALL and RET.
pub struct Cpu {
    memory: Memory,
    registers: RegisterFile,
    pc: u16,
    fl: Flags,
    halted: bool,
    cycles: u64,
    output: OutputHandler,
    config: CpuConfig,
}

impl Cpu {
    /// Create a CPU with `program` installed at address 0
    pub fn new(program: &Program, config: CpuConfig) -> Result<Self> {
        let mut memory = Memory::new();
        memory.load(program.bytes())?;

        Ok(Self {
            memory,
            registers: RegisterFile::new(),
            pc: 0,
            fl: Flags::CLEAR,
            halted: false,
            cycles: 0,
            output: OutputHandler::new(),
            config,
        })
    }

    /// Replace the output handler (the CLI attaches stdout)
    pub fn set_output(&mut self, output: OutputHandler) {
        self.output = output;
    }

    /// Run until HLT
    pub fn run(&mut self) -> Result<ExecutionResult> {
        while !self.halted {
            self.step()?;
        }

        Ok(ExecutionResult {
            cycles: self.cycles,
            outputs: self.output.printed().to_vec(),
        })
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<()> {
        if self.config.trace {
            self.trace();
        }

        let instruction = self.fetch_and_decode()?;
        self.execute(instruction)?;
        self.cycles += 1;
        Ok(())
    }

    /// Fetch the three-byte window at PC and decode it
    ///
    /// Operand bytes are read before decode regardless of arity, so any
    /// instruction that decodes at all sits at PC <= 0xFD.
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let opcode = self.memory.read(self.pc)?;
        let a = self.memory.read(self.pc + 1)?;
        let b = self.memory.read(self.pc + 2)?;

        Instruction::decode(opcode, a, b).map_err(|err| self.decode_error(err))
    }

    fn decode_error(&self, err: IsaError) -> VmError {
        match err {
            IsaError::UnknownOpcode(opcode) => VmError::UnknownInstruction {
                opcode,
                pc: self.pc,
            },
            IsaError::InvalidRegister(index) => VmError::InvalidRegister {
                index,
                pc: self.pc,
            },
            IsaError::UnsupportedAluOp(opcode) => VmError::UnsupportedOperation {
                opcode,
                pc: self.pc,
            },
        }
    }

    fn execute(&mut self, instruction: Instruction) -> Result<()> {
        match instruction {
            // ========== Control ==========
            Instruction::Hlt => {
                tracing::debug!("HLT at PC={:#04x} after {} cycles", self.pc, self.cycles);
                self.halted = true;
                self.pc += 1;
            }

            Instruction::Ret => {
                self.pc = self.pop()? as u16;
            }

            // ========== Data ==========
            Instruction::Ldi { reg, value } => {
                self.registers.set(reg, value);
                self.pc += 3;
            }

            Instruction::Prn { reg } => {
                let value = self.registers.get(reg);
                self.output.print(value)?;
                self.pc += 2;
            }

            // ========== ALU ==========
            Instruction::Alu { op, a, b } => {
                let lhs = self.registers.get(a);
                let rhs = self.registers.get(b);
                match alu::compute(op, lhs, rhs) {
                    Ok(AluOutcome::Value(value)) => self.registers.set(a, value),
                    Ok(AluOutcome::Flags(flags)) => self.fl = flags,
                    Err(AluError::DivisionByZero) => {
                        return Err(VmError::DivisionByZero { pc: self.pc });
                    }
                }
                self.pc += 3;
            }

            // ========== Stack ==========
            Instruction::Push { reg } => {
                let value = self.registers.get(reg);
                self.push(value)?;
                self.pc += 2;
            }

            Instruction::Pop { reg } => {
                let value = self.pop()?;
                self.registers.set(reg, value);
                self.pc += 2;
            }

            // ========== Subroutines and jumps ==========
            Instruction::Call { reg } => {
                // decode read the byte at PC + 2, so the return address fits a cell
                let return_address = (self.pc + 2) as u8;
                self.push(return_address)?;
                self.pc = self.registers.get(reg) as u16;
            }

            Instruction::Jmp { reg } => {
                self.pc = self.registers.get(reg) as u16;
            }

            Instruction::Jeq { reg } => self.branch_if(self.fl.equal(), reg),
            Instruction::Jne { reg } => self.branch_if(!self.fl.equal(), reg),
            Instruction::Jgt { reg } => self.branch_if(self.fl.greater(), reg),
            Instruction::Jlt { reg } => self.branch_if(self.fl.less(), reg),
            Instruction::Jge { reg } => {
                self.branch_if(self.fl.greater() || self.fl.equal(), reg)
            }
        }

        Ok(())
    }

    fn branch_if(&mut self, taken: bool, target: Register) {
        if taken {
            self.pc = self.registers.get(target) as u16;
        } else {
            self.pc += 2;
        }
    }

    /// Push a byte; the stack stops at address 0
    fn push(&mut self, value: u8) -> Result<()> {
        let sp = self.registers.sp();
        if sp == 0 {
            return Err(VmError::StackOverflow { pc: self.pc });
        }

        let sp = sp - 1;
        self.memory.write(sp as u16, value)?;
        self.registers.set_sp(sp);
        Ok(())
    }

    /// Pop a byte; the stack stops at address 0xFF
    fn pop(&mut self) -> Result<u8> {
        let sp = self.registers.sp();
        if sp == 0xFF {
            return Err(VmError::StackUnderflow { pc: self.pc });
        }

        let value = self.memory.read(sp as u16)?;
        self.registers.set_sp(sp + 1);
        Ok(value)
    }

    /// Print PC, FL, the fetch window, and all registers to stderr
    fn trace(&self) {
        let at = |offset: u16| self.memory.read(self.pc + offset).unwrap_or(0);

        eprint!(
            "TRACE: {:02X} {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.fl.bits(),
            at(0),
            at(1),
            at(2),
        );
        for value in self.registers.values() {
            eprint!(" {:02X}", value);
        }
        eprintln!();
    }

    /// Program counter
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Flags register
    pub fn flags(&self) -> Flags {
        self.fl
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Instructions executed so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Register file (for inspection)
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Memory (for inspection)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Values printed so far
    pub fn outputs(&self) -> &[u8] {
        self.output.printed()
    }
}
